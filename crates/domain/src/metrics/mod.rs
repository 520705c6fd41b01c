pub mod risk_of_ruin;
pub mod win_probability;
