//! Revocable display handles for fetched binary images.
//!
//! The read dashboard swaps its graph image every cycle. `HandleSlot` owns the
//! handle currently on screen and releases the previous one on every swap, on
//! `clear` and on drop, so superseded blob URLs never accumulate.

#[cfg(test)]
#[path = "object_url_test.rs"]
mod object_url_test;

/// A displayable resource that must be released once superseded.
pub trait DisplayHandle {
    fn url(&self) -> &str;
    fn release(self);
}

/// Holds at most one live handle.
pub struct HandleSlot<H: DisplayHandle> {
    current: Option<H>,
}

impl<H: DisplayHandle> Default for HandleSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: DisplayHandle> HandleSlot<H> {
    /// Install `next`, releasing the handle it replaces. Returns the new URL.
    pub fn replace(&mut self, next: H) -> String {
        let url = next.url().to_owned();
        if let Some(previous) = self.current.replace(next) {
            previous.release();
        }
        url
    }

    /// Release the current handle, if any.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.release();
        }
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current.as_ref().map(DisplayHandle::url)
    }
}

impl<H: DisplayHandle> Drop for HandleSlot<H> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// A `blob:` URL created with `URL.createObjectURL`.
#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    /// Wrap `bytes` in a `Blob` of type `mime` and mint an object URL for it.
    #[cfg(feature = "hydrate")]
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Option<Self> {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
        web_sys::Url::create_object_url_with_blob(&blob).ok().map(Self)
    }
}

impl DisplayHandle for ObjectUrl {
    fn url(&self) -> &str {
        &self.0
    }

    fn release(self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = web_sys::Url::revoke_object_url(&self.0);
        }
    }
}
