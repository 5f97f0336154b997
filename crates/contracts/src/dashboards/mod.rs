pub mod d200_profit_report;
