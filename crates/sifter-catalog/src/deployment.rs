//! Deployment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sifter::{FieldLabel, Record};

use crate::state::State;

/// Status of a deployment: its state and an optional human message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentStatus {
    pub state: State,
    pub message: String,
}

impl DeploymentStatus {
    pub fn new(state: State) -> Self {
        DeploymentStatus {
            state,
            message: String::new(),
        }
    }
}

impl FieldLabel for DeploymentStatus {
    fn label(&self) -> &'static str {
        self.state.label()
    }
}

/// An application deployment as returned by the list endpoint.
///
/// Queryable fields: `name`, `displayName`, `appName`, `appVersion`,
/// `deployId`, `status` (the state label) and `createTime` (absent until
/// the deployment has been created).
///
/// ```
/// use sifter::Record;
/// use sifter_catalog::{Deployment, State};
///
/// let deployment = Deployment::new("wordpress-1", "wordpress", "2.1.0").with_state(State::Running);
/// assert_eq!(Deployment::APP_VERSION, "appVersion");
/// assert_eq!(deployment.field("status").unwrap().as_str(), Some("RUNNING"));
/// assert!(deployment.field("createTime").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
#[record(rename_all = "camelCase")]
pub struct Deployment {
    #[field(Text)]
    pub name: String,
    #[field(Text)]
    pub display_name: String,
    #[field(Text)]
    pub app_name: String,
    #[field(Text)]
    pub app_version: String,
    #[field(Text)]
    pub deploy_id: String,
    #[field(Label)]
    pub status: DeploymentStatus,
    #[field(Instant)]
    pub create_time: Option<DateTime<Utc>>,
}

impl Deployment {
    /// Creates a deployment with the given name and application.
    ///
    /// The display name defaults to the name; the state is `UNKNOWN`.
    pub fn new(name: impl Into<String>, app_name: impl Into<String>, app_version: impl Into<String>) -> Self {
        let name = name.into();
        Deployment {
            display_name: name.clone(),
            name,
            app_name: app_name.into(),
            app_version: app_version.into(),
            ..Deployment::default()
        }
    }

    pub fn with_deploy_id(mut self, deploy_id: impl Into<String>) -> Self {
        self.deploy_id = deploy_id.into();
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_state(mut self, state: State) -> Self {
        self.status = DeploymentStatus::new(state);
        self
    }

    pub fn with_create_time(mut self, create_time: DateTime<Utc>) -> Self {
        self.create_time = Some(create_time);
        self
    }
}
