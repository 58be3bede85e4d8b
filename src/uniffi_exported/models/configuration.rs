use crate::prelude::*;

/// Everything `configure` needs to set up the SDK on the host.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct PurchasesConfiguration {
    pub api_key: String,
    /// `None` lets the SDK generate an anonymous app user id.
    pub app_user_id: Option<String>,
    /// `true` if the app completes purchases itself and only wants the
    /// backend to track them.
    pub observer_mode: bool,
    /// iOS only, the `UserDefaults` suite the SDK stores its state in.
    pub user_defaults_suite_name: Option<String>,
}

impl PurchasesConfiguration {
    pub fn new(api_key: impl AsRef<str>) -> Self {
        Self {
            api_key: api_key.as_ref().to_owned(),
            app_user_id: None,
            observer_mode: false,
            user_defaults_suite_name: None,
        }
    }

    pub fn with_app_user_id(mut self, app_user_id: impl AsRef<str>) -> Self {
        self.app_user_id = Some(app_user_id.as_ref().to_owned());
        self
    }

    pub fn with_observer_mode(mut self, observer_mode: bool) -> Self {
        self.observer_mode = observer_mode;
        self
    }

    pub fn with_user_defaults_suite_name(mut self, suite_name: impl AsRef<str>) -> Self {
        self.user_defaults_suite_name = Some(suite_name.as_ref().to_owned());
        self
    }

    pub(crate) fn into_operation(self) -> Operation {
        Operation::new(OperationKind::Configure)
            .with_argument(self.api_key)
            .with_argument(self.app_user_id)
            .with_argument(self.observer_mode)
            .with_argument(self.user_defaults_suite_name)
    }
}
