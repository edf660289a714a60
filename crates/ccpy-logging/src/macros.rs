//! ---
//! ccpy_section: "04-logging"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Structured logging adapters for the generator and shim."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
//! Context-enriched logging macros.

#[doc(hidden)]
#[macro_export]
macro_rules! __gen_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::__tracing::event!(
            $level,
            version = ctx.version.unwrap_or(""),
            output_dir = ctx.output_dir.unwrap_or(""),
            target = ctx.target.unwrap_or(""),
            stage = ctx.stage.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with generator context.
#[macro_export]
macro_rules! gen_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__gen_event!($crate::__tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__gen_event!(
            $crate::__tracing::Level::INFO,
            $crate::LogContext::default(),
            $($arg)+
        )
    };
}

/// Emit a debug log enriched with generator context.
#[macro_export]
macro_rules! gen_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__gen_event!($crate::__tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__gen_event!(
            $crate::__tracing::Level::DEBUG,
            $crate::LogContext::default(),
            $($arg)+
        )
    };
}

/// Emit a warning enriched with generator context.
#[macro_export]
macro_rules! gen_warn {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__gen_event!($crate::__tracing::Level::WARN, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__gen_event!(
            $crate::__tracing::Level::WARN,
            $crate::LogContext::default(),
            $($arg)+
        )
    };
}

/// Emit an error log enriched with generator context.
#[macro_export]
macro_rules! gen_error {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__gen_event!($crate::__tracing::Level::ERROR, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__gen_event!(
            $crate::__tracing::Level::ERROR,
            $crate::LogContext::default(),
            $($arg)+
        )
    };
}
