pub mod p100_product_profit;
