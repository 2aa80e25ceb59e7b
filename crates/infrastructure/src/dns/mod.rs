pub mod exchange;
pub mod forwarding;
pub mod transport;

pub use exchange::WireDnsExchange;
pub use forwarding::{MessageBuilder, ParsedResponse, RecordTypeMapper, ResponseParser};
