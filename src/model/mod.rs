pub mod bill;
pub mod schedule;
pub mod service;
pub mod tariff;
