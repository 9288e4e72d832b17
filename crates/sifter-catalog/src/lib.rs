//! Record kinds served by the deployment list endpoints, and the glue that
//! turns a list request into a page of them.
//!
//! ```
//! use sifter_catalog::{Deployment, ListRequest, State};
//!
//! let deployments = vec![
//!     Deployment::new("web-b", "web", "1.0.1").with_state(State::Running),
//!     Deployment::new("web-a", "web", "1.2.1").with_state(State::Down),
//!     Deployment::new("db", "postgres", "15.2").with_state(State::Running),
//! ];
//!
//! let request = ListRequest {
//!     filter: "status=running".into(),
//!     order_by: "name".into(),
//!     ..ListRequest::default()
//! };
//! let page = request.select(&deployments)?;
//!
//! assert_eq!(page.total_elements, 2);
//! assert_eq!(page.items[0].name, "db");
//! assert_eq!(page.items[1].name, "web-b");
//! # Ok::<(), sifter::SelectError>(())
//! ```

mod cluster;
mod deployment;
mod request;
mod state;

pub use cluster::{Cluster, ClusterInfo, ClusterStatus};
pub use deployment::{Deployment, DeploymentStatus};
pub use request::{ListOptions, ListPage, ListRequest, DEFAULT_LIST_PAGE_SIZE};
pub use state::State;
