mod extract;
mod record;
mod record_type;
mod response_status;

pub use extract::{addresses_of, filter_by_type, nameserver_names};
pub use record::{RecordData, ResourceRecord};
pub use record_type::RecordType;
pub use response_status::ResponseStatus;
