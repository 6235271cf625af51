//! Customers and self-service portal clients.
//!
//! Both collections are maintained by other parts of the front-desk tool. The
//! scheduling core reads them and only ever writes `Customer::last_visit`.

mod customers_model;

pub use customers_model::{find_by_name, Client, Customer};
