pub mod a001_customer;
pub mod a002_product;
pub mod a003_supply_item;
pub mod a004_spec_sheet;
pub mod a005_order;
