//! Sign-off gate for save and export actions.

use super::SignOffError;

/// Sign-off state attached to forms that require one before save/export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignOff {
    signer_name: String,
    signature_image: Option<Vec<u8>>,
}

impl SignOff {
    /// Creates a sign-off with the given signer name and no signature image.
    #[must_use]
    pub fn new(signer_name: impl Into<String>) -> Self {
        Self {
            signer_name: signer_name.into(),
            signature_image: None,
        }
    }

    /// Attaches the captured signature image bytes.
    #[must_use]
    pub fn with_signature_image(mut self, image: Vec<u8>) -> Self {
        self.signature_image = Some(image);
        self
    }

    /// Returns the signer name.
    #[must_use]
    pub fn signer_name(&self) -> &str {
        &self.signer_name
    }

    /// Returns the signature image bytes, if captured.
    #[must_use]
    pub fn signature_image(&self) -> Option<&[u8]> {
        self.signature_image.as_deref()
    }

    /// Checks that the sign-off is complete enough to allow save/export.
    ///
    /// # Errors
    ///
    /// Returns [`SignOffError::MissingSignerName`] when the signer name is
    /// blank, or [`SignOffError::MissingSignatureImage`] when no signature
    /// image has been captured.
    pub fn ensure_complete(&self) -> Result<(), SignOffError> {
        if self.signer_name.trim().is_empty() {
            return Err(SignOffError::MissingSignerName);
        }
        if self
            .signature_image
            .as_ref()
            .is_none_or(|image| image.is_empty())
        {
            return Err(SignOffError::MissingSignatureImage);
        }
        Ok(())
    }
}
