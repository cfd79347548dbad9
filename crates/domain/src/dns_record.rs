pub mod class;
pub mod rdata;
pub mod record;
pub mod record_type;

pub use class::DnsClass;
pub use rdata::{Mx, RData, Soa};
pub use record::{Question, ResourceRecord};
pub use record_type::RecordType;
