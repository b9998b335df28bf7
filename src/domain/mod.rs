pub mod analysis;
pub mod gauge;

/// Centralized logging system for the entire application
pub mod logging {
    use derive_more::Display;

    /// Log levels for structured logging
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
    pub enum LogLevel {
        #[display(fmt = "TRACE")]
        Trace = 0,
        #[display(fmt = "DEBUG")]
        Debug = 1,
        #[display(fmt = " INFO")]
        Info = 2,
        #[display(fmt = " WARN")]
        Warn = 3,
        #[display(fmt = "ERROR")]
        Error = 4,
    }

    /// Component/Layer identification for logging
    #[derive(Debug, Clone, Display)]
    pub enum LogComponent {
        #[display(fmt = "DOM:{}", _0)]
        Domain(&'static str),
        #[display(fmt = "APP:{}", _0)]
        Application(&'static str),
        #[display(fmt = "INF:{}", _0)]
        Infrastructure(&'static str),
        #[display(fmt = "PRE:{}", _0)]
        Presentation(&'static str),
    }

    /// Structured log entry
    #[derive(Debug, Clone)]
    pub struct LogEntry {
        pub timestamp: u64,
        pub level: LogLevel,
        pub component: LogComponent,
        pub message: String,
    }

    impl LogEntry {
        pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
            Self {
                timestamp: get_time_provider().current_timestamp(),
                level,
                component,
                message: message.to_string(),
            }
        }
    }

    /// Domain abstraction for time service
    pub trait TimeProvider: Send + Sync {
        fn current_timestamp(&self) -> u64;
        fn format_timestamp(&self, timestamp: u64) -> String;
    }

    /// Domain abstraction for structured logging
    pub trait Logger: Send + Sync {
        fn log(&self, entry: LogEntry);

        fn trace(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Trace, component, message));
        }

        fn debug(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Debug, component, message));
        }

        fn info(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Info, component, message));
        }

        fn warn(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Warn, component, message));
        }

        fn error(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Error, component, message));
        }
    }

    /// Global services using thread-safe statics
    use std::sync::OnceLock;
    static GLOBAL_LOGGER: OnceLock<Box<dyn Logger + Sync + Send>> = OnceLock::new();
    static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider + Sync + Send>> = OnceLock::new();

    /// Initialize global logger
    pub fn init_logger(logger: Box<dyn Logger + Sync + Send>) {
        let _ = GLOBAL_LOGGER.set(logger);
    }

    /// Initialize global time provider
    pub fn init_time_provider(time_provider: Box<dyn TimeProvider + Sync + Send>) {
        let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
    }

    /// Get global logger reference
    pub fn get_logger() -> &'static dyn Logger {
        GLOBAL_LOGGER
            .get()
            .map(|logger| logger.as_ref())
            .unwrap_or(&NoOpLogger)
    }

    /// Get global time provider reference
    pub fn get_time_provider() -> &'static dyn TimeProvider {
        GLOBAL_TIME_PROVIDER
            .get()
            .map(|provider| provider.as_ref())
            .unwrap_or(&CounterTimeProvider)
    }

    /// No-op logger fallback
    struct NoOpLogger;
    impl Logger for NoOpLogger {
        fn log(&self, _entry: LogEntry) {}
    }

    /// Monotonic fallback when no browser clock is wired in (native tests)
    struct CounterTimeProvider;
    impl TimeProvider for CounterTimeProvider {
        fn current_timestamp(&self) -> u64 {
            use std::sync::atomic::{AtomicU64, Ordering};
            static COUNTER: AtomicU64 = AtomicU64::new(0);
            COUNTER.fetch_add(1, Ordering::SeqCst)
        }

        fn format_timestamp(&self, timestamp: u64) -> String {
            format!("{:06}", timestamp)
        }
    }

    /// Convenience macros for logging
    #[macro_export]
    macro_rules! log_debug {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_info {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_warn {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_error {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
        };
    }
}

/// Simplified error system - no over-engineering!
pub mod errors {
    use std::fmt::{Display, Formatter, Result as FmtResult};

    /// Everything that can go wrong between the fetch and the canvas.
    /// `Dom` and `Rendering` are per-widget and never abort the page.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DashboardError {
        Network(String),
        Decode(String),
        Api(String),
        Dom(String),
        Rendering(String),
    }

    impl DashboardError {
        /// The part of the error shown on the status line.
        pub fn user_message(&self) -> &str {
            match self {
                Self::Network(msg)
                | Self::Decode(msg)
                | Self::Api(msg)
                | Self::Dom(msg)
                | Self::Rendering(msg) => msg,
            }
        }
    }

    impl Display for DashboardError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                Self::Network(msg) => write!(f, "Network Error: {}", msg),
                Self::Decode(msg) => write!(f, "Decode Error: {}", msg),
                Self::Api(msg) => write!(f, "API Error: {}", msg),
                Self::Dom(msg) => write!(f, "DOM Error: {}", msg),
                Self::Rendering(msg) => write!(f, "Rendering Error: {}", msg),
            }
        }
    }

    impl std::error::Error for DashboardError {}

    impl From<DashboardError> for wasm_bindgen::JsValue {
        fn from(error: DashboardError) -> Self {
            wasm_bindgen::JsValue::from_str(&error.to_string())
        }
    }

    pub type NetworkResult<T> = Result<T, DashboardError>;
    pub type RenderingResult<T> = Result<T, DashboardError>;
}
