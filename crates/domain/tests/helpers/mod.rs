mod builders;

pub use builders::{a_record, name, HeaderBuilder};
