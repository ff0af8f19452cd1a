use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_cylinder_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_cylinder_id: i32,
    pub order_id: String,
    pub cp_id: i32,
    pub numbers_of_cylinder: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::OrderId"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::cylinder_price::Entity",
        from = "Column::CpId",
        to = "super::cylinder_price::Column::CpId"
    )]
    CylinderPrice,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::cylinder_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CylinderPrice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
