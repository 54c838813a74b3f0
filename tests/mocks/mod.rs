pub mod mock_contact_client;

pub use mock_contact_client::{MockContactClient, MockResponse};
