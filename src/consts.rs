pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Fixed values for the dashboard, grouped by functional area.

    use std::time::Duration;

    // =============================================================================
    // SERVICE CONFIGURATION
    // =============================================================================

    /// Base address of the budgeting service when no override is given.
    pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

    /// Connect timeout for service requests. No overall request timeout is
    /// set beyond the transport's defaults.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Directory under the user's home holding the config file and the log.
    pub const APP_DIR: &str = ".budget-dashboard";

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of notifications to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between request tasks and the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long a notification stays on screen.
    pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

    /// Key poll interval for the UI loop; also the notification expiry granularity.
    pub const UI_TICK: Duration = Duration::from_millis(100);

    /// Summary usage tiers, compared against the percentage rounded to one decimal.
    pub mod tiers {
        /// Above this, a category is in the alert tier.
        pub const ALERT_ABOVE: f64 = 90.0;
        /// Above this (and not alert), a category is in the warning tier.
        pub const WARNING_ABOVE: f64 = 75.0;
    }
}
