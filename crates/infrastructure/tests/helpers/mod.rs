pub mod dns_server_mock;
pub mod txt_exchange;
