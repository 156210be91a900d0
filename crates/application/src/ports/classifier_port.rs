//! Classifier port
//!
//! Defines the interface for classifying a weather image.

use async_trait::async_trait;
use domain::ClassificationResult;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the image classification endpoint
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClassifierPort: Send + Sync {
    /// Upload an image and return the classifier's verdict
    async fn classify(
        &self,
        image: Vec<u8>,
        file_name: String,
    ) -> Result<ClassificationResult, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ClassifierPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ClassifierPort>();
    }
}
