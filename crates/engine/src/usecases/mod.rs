pub mod u100_build_profit_report;
