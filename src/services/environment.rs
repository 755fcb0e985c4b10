/// Read-only view of the host the tracker runs in. Every value may be empty.
pub trait Environment: Send + Sync {
    fn location_path(&self) -> String;

    fn referrer(&self) -> String;

    fn user_agent(&self) -> String;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub location_path: String,
    pub referrer: String,
    pub user_agent: String,
}

impl StaticEnvironment {
    pub fn new(location_path: impl Into<String>) -> Self {
        Self {
            location_path: location_path.into(),
            ..Default::default()
        }
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = referrer.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Environment for StaticEnvironment {
    fn location_path(&self) -> String {
        self.location_path.clone()
    }

    fn referrer(&self) -> String {
        self.referrer.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }
}
