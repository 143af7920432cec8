use async_trait::async_trait;

/// Lifecycle callbacks invoked once each by the hosting runtime.
#[async_trait]
pub trait IntegrationHooks: Send + Sync {
    /// Called after configuration is loaded, before any action runs
    async fn register(&self);

    /// Called during shutdown, after the last action has completed
    async fn unregister(&self);

    /// Name of this integration
    fn name(&self) -> &'static str;
}
