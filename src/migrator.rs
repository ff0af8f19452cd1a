use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_directory_tables::Migration),
            Box::new(m20240301_000002_create_pricing_tables::Migration),
            Box::new(m20240301_000003_create_order_tables::Migration),
            Box::new(m20240301_000004_create_payment_tables::Migration),
        ]
    }
}

mod m20240301_000001_create_directory_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_directory_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::SupplierId)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Suppliers::Prefix).string().not_null())
                        .col(ColumnDef::new(Suppliers::SupplierName).string().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CustomersInSuppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CustomersInSuppliers::CisId)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(CustomersInSuppliers::CustomerId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CustomersInSuppliers::SupplierId)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CustomersInSuppliers::CustomerName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CustomersInSuppliers::MainPhone)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CustomersInSuppliers::InitArrears)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(CustomersInSuppliers::Note).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_cis_supplier")
                        .table(CustomersInSuppliers::Table)
                        .col(CustomersInSuppliers::SupplierId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CustomersInSuppliers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Suppliers {
        Table,
        SupplierId,
        Prefix,
        SupplierName,
    }

    #[derive(DeriveIden)]
    enum CustomersInSuppliers {
        Table,
        CisId,
        CustomerId,
        SupplierId,
        CustomerName,
        MainPhone,
        InitArrears,
        Note,
    }
}

mod m20240301_000002_create_pricing_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_pricing_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(GasCylinders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(GasCylinders::GasId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(GasCylinders::SupplierId).string().not_null())
                        .col(ColumnDef::new(GasCylinders::GasType).string().not_null())
                        .col(ColumnDef::new(GasCylinders::Kilogram).integer().not_null())
                        .col(
                            ColumnDef::new(GasCylinders::Visible)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(GasCylinders::Deleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(GasPrices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(GasPrices::GpId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(GasPrices::GasId).integer().not_null())
                        .col(ColumnDef::new(GasPrices::Price).decimal().not_null())
                        .col(
                            ColumnDef::new(GasPrices::EffectTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GasPrices::UploadTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GasPrices::Deleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CisGasPrices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CisGasPrices::CisGpId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(CisGasPrices::GasId).integer().not_null())
                        .col(ColumnDef::new(CisGasPrices::CisId).string().not_null())
                        .col(ColumnDef::new(CisGasPrices::Price).decimal().not_null())
                        .col(
                            ColumnDef::new(CisGasPrices::EffectTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CisGasPrices::UploadTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CisGasPrices::Deleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Commodities::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Commodities::CommodityId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Commodities::SupplierId).string().not_null())
                        .col(
                            ColumnDef::new(Commodities::CommodityName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Commodities::CommodityType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Commodities::Visible)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Commodities::Instock)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Commodities::Deleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CommodityPrices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CommodityPrices::CommodityPriceId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(CommodityPrices::CommodityId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(CommodityPrices::Price).decimal().not_null())
                        .col(
                            ColumnDef::new(CommodityPrices::CreateTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CommodityPrices::Deleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CylinderPrices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CylinderPrices::CpId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(CylinderPrices::CylinderSpecification)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CylinderPrices::CustomerActionType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(CylinderPrices::Price).decimal().not_null())
                        .col(
                            ColumnDef::new(CylinderPrices::Deleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_gas_prices_gas_effect")
                        .table(GasPrices::Table)
                        .col(GasPrices::GasId)
                        .col(GasPrices::EffectTimeStamp)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_cis_gas_prices_cis_gas_effect")
                        .table(CisGasPrices::Table)
                        .col(CisGasPrices::CisId)
                        .col(CisGasPrices::GasId)
                        .col(CisGasPrices::EffectTimeStamp)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CylinderPrices::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CommodityPrices::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Commodities::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CisGasPrices::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(GasPrices::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(GasCylinders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum GasCylinders {
        Table,
        GasId,
        SupplierId,
        GasType,
        Kilogram,
        Visible,
        Deleted,
    }

    #[derive(DeriveIden)]
    enum GasPrices {
        Table,
        GpId,
        GasId,
        Price,
        EffectTimeStamp,
        UploadTimeStamp,
        Deleted,
    }

    #[derive(DeriveIden)]
    enum CisGasPrices {
        Table,
        CisGpId,
        GasId,
        CisId,
        Price,
        EffectTimeStamp,
        UploadTimeStamp,
        Deleted,
    }

    #[derive(DeriveIden)]
    enum Commodities {
        Table,
        CommodityId,
        SupplierId,
        CommodityName,
        CommodityType,
        Visible,
        Instock,
        Deleted,
    }

    #[derive(DeriveIden)]
    enum CommodityPrices {
        Table,
        CommodityPriceId,
        CommodityId,
        Price,
        CreateTimeStamp,
        Deleted,
    }

    #[derive(DeriveIden)]
    enum CylinderPrices {
        Table,
        CpId,
        CylinderSpecification,
        CustomerActionType,
        Price,
        Deleted,
    }
}

mod m20240301_000003_create_order_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000003_create_order_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // order_id is the uniqueness backstop for the scan-based allocator,
            // so it must stay a primary key.
            manager
                .create_table(
                    Table::create()
                        .table(Orders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Orders::OrderId)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Orders::CisId).string().not_null())
                        .col(ColumnDef::new(Orders::ContactPhone).string().not_null())
                        .col(ColumnDef::new(Orders::Note).string().null())
                        .col(ColumnDef::new(Orders::OrderStatus).string().not_null())
                        .col(
                            ColumnDef::new(Orders::DeliverySubStatus)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Orders::DeliveryType).string().not_null())
                        .col(ColumnDef::new(Orders::TimeSlot).string().null())
                        .col(
                            ColumnDef::new(Orders::Discount)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Orders::GasDiscount)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Orders::TaxIdNumber).string().null())
                        .col(ColumnDef::new(Orders::AddressId).big_integer().not_null())
                        .col(ColumnDef::new(Orders::CourierId).string().null())
                        .col(
                            ColumnDef::new(Orders::DeliveryTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Orders::CreateTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(DeliveryDescriptors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DeliveryDescriptors::DeliveryId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(DeliveryDescriptors::CisId)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryDescriptors::DeliveryLocation)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryDescriptors::UsageName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryDescriptors::Floor)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryDescriptors::IsElevator)
                                .boolean()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OrderGasLines::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderGasLines::OrderGasId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(OrderGasLines::OrderId).string().not_null())
                        .col(ColumnDef::new(OrderGasLines::GpId).integer().null())
                        .col(ColumnDef::new(OrderGasLines::CisGpId).integer().null())
                        .col(
                            ColumnDef::new(OrderGasLines::NumbersOfCylinder)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(OrderGasLines::DeliveryId).integer().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_gas_lines_order")
                                .from(OrderGasLines::Table, OrderGasLines::OrderId)
                                .to(Orders::Table, Orders::OrderId),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OrderCommodityLines::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderCommodityLines::OrderCommodityId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(OrderCommodityLines::OrderId)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderCommodityLines::CommodityPriceId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderCommodityLines::NumbersOfCommodity)
                                .integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_commodity_lines_order")
                                .from(OrderCommodityLines::Table, OrderCommodityLines::OrderId)
                                .to(Orders::Table, Orders::OrderId),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OrderCylinderLines::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderCylinderLines::OrderCylinderId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(OrderCylinderLines::OrderId)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderCylinderLines::CpId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderCylinderLines::NumbersOfCylinder)
                                .integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_cylinder_lines_order")
                                .from(OrderCylinderLines::Table, OrderCylinderLines::OrderId)
                                .to(Orders::Table, Orders::OrderId),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CylinderMortgages::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CylinderMortgages::CisCylinderMortgageId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(CylinderMortgages::CisId).string().not_null())
                        .col(
                            ColumnDef::new(CylinderMortgages::OrderId)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CylinderMortgages::TakeCylinderType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CylinderMortgages::CylinderSpecification)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CylinderMortgages::Money)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CylinderMortgages::NumbersOfCylinder)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CylinderMortgages::CreateTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(UsageFees::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(UsageFees::OrderUsageFeeId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(UsageFees::OrderId).string().not_null())
                        .col(
                            ColumnDef::new(UsageFees::NumberOfRecords)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(UsageFees::Money).decimal().not_null())
                        .col(
                            ColumnDef::new(UsageFees::CreateTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OrderRefunds::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderRefunds::OrderRefundId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(OrderRefunds::OrderId).string().not_null())
                        .col(
                            ColumnDef::new(OrderRefunds::RefundGasKilogram)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderRefunds::RefundGasType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(OrderRefunds::GasPrice).decimal().not_null())
                        .col(
                            ColumnDef::new(OrderRefunds::OrderRefundType)
                                .string()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_orders_delivery_time")
                        .table(Orders::Table)
                        .col(Orders::DeliveryTimeStamp)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(OrderRefunds::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(UsageFees::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CylinderMortgages::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(OrderCylinderLines::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(OrderCommodityLines::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(OrderGasLines::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(DeliveryDescriptors::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Orders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Orders {
        Table,
        OrderId,
        CisId,
        ContactPhone,
        Note,
        OrderStatus,
        DeliverySubStatus,
        DeliveryType,
        TimeSlot,
        Discount,
        GasDiscount,
        TaxIdNumber,
        AddressId,
        CourierId,
        DeliveryTimeStamp,
        CreateTimeStamp,
    }

    #[derive(DeriveIden)]
    enum DeliveryDescriptors {
        Table,
        DeliveryId,
        CisId,
        DeliveryLocation,
        UsageName,
        Floor,
        IsElevator,
    }

    #[derive(DeriveIden)]
    enum OrderGasLines {
        Table,
        OrderGasId,
        OrderId,
        GpId,
        CisGpId,
        NumbersOfCylinder,
        DeliveryId,
    }

    #[derive(DeriveIden)]
    enum OrderCommodityLines {
        Table,
        OrderCommodityId,
        OrderId,
        CommodityPriceId,
        NumbersOfCommodity,
    }

    #[derive(DeriveIden)]
    enum OrderCylinderLines {
        Table,
        OrderCylinderId,
        OrderId,
        CpId,
        NumbersOfCylinder,
    }

    #[derive(DeriveIden)]
    enum CylinderMortgages {
        Table,
        CisCylinderMortgageId,
        CisId,
        OrderId,
        TakeCylinderType,
        CylinderSpecification,
        Money,
        NumbersOfCylinder,
        CreateTimeStamp,
    }

    #[derive(DeriveIden)]
    enum UsageFees {
        Table,
        OrderUsageFeeId,
        OrderId,
        NumberOfRecords,
        Money,
        CreateTimeStamp,
    }

    #[derive(DeriveIden)]
    enum OrderRefunds {
        Table,
        OrderRefundId,
        OrderId,
        RefundGasKilogram,
        RefundGasType,
        GasPrice,
        OrderRefundType,
    }
}

mod m20240301_000004_create_payment_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000004_create_payment_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PayupWorks::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PayupWorks::OrderPayupWorkId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PayupWorks::PayWay).string().not_null())
                        .col(
                            ColumnDef::new(PayupWorks::PaymentAmount)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PayupWorks::CreateTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Payups::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Payups::OrderPayupId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Payups::OrderId).string().not_null())
                        .col(
                            ColumnDef::new(Payups::OrderPayupWorkId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Payups::PaymentAmount).decimal().not_null())
                        .col(
                            ColumnDef::new(Payups::IsArrearsOrder)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_payups_payup_work")
                                .from(Payups::Table, Payups::OrderPayupWorkId)
                                .to(PayupWorks::Table, PayupWorks::OrderPayupWorkId),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OrderChecks::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderChecks::CheckId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(OrderChecks::OrderPayupWorkId)
                                .integer()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(OrderChecks::CheckNumber).string().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(WalletLedgerEntries::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WalletLedgerEntries::CisWalletId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(WalletLedgerEntries::CisId)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WalletLedgerEntries::OrderId)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WalletLedgerEntries::FlowType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WalletLedgerEntries::Money)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WalletLedgerEntries::CreateTimeStamp)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_wallet_ledger_cis")
                        .table(WalletLedgerEntries::Table)
                        .col(WalletLedgerEntries::CisId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(WalletLedgerEntries::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(OrderChecks::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Payups::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PayupWorks::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PayupWorks {
        Table,
        OrderPayupWorkId,
        PayWay,
        PaymentAmount,
        CreateTimeStamp,
    }

    #[derive(DeriveIden)]
    enum Payups {
        Table,
        OrderPayupId,
        OrderId,
        OrderPayupWorkId,
        PaymentAmount,
        IsArrearsOrder,
    }

    #[derive(DeriveIden)]
    enum OrderChecks {
        Table,
        CheckId,
        OrderPayupWorkId,
        CheckNumber,
    }

    #[derive(DeriveIden)]
    enum WalletLedgerEntries {
        Table,
        CisWalletId,
        CisId,
        OrderId,
        FlowType,
        Money,
        CreateTimeStamp,
    }
}
