//! Facade crate for the Numerus slices and shared modules.
//! Re-exports domain/kernel primitives and composes the slice routers.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use numerus_domain as domain;
pub use numerus_kernel as kernel;
pub use numerus_roman as roman;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use axum::extract::FromRef;
        use numerus_kernel::server::Metrics;
        use utoipa_axum::router::OpenApiRouter;

        pub use numerus_kernel::server::router::system_router;
        pub use numerus_roman::server::roman_router;

        /// System endpoints merged with every enabled slice.
        pub fn api_router<S>() -> OpenApiRouter<S>
        where
            S: Send + Sync + Clone + 'static,
            Metrics: FromRef<S>,
        {
            system_router::<S>().merge(roman_router::<S>())
        }
    }
}

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        "roman",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
