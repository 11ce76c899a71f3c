//! Native browser confirm dialog.

/// Blocking yes/no confirmation. Returns `false` outside a browser, so
/// destructive actions never fire during SSR.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .map_or(false, |w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
