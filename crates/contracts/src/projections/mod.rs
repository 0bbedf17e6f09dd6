pub mod p900_purchase_report;
