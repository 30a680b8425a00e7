//! Pre-call adjustment of the client/document pair.

use crate::client::TikaClient;
use crate::document::FileDocument;

/// Strategy run before each extraction call.
///
/// Receives the client and document by value and returns the pair the
/// call will actually use, so a host can redirect the document or
/// retarget the client per call. The default leaves both untouched.
pub trait PreProcessFile: Send + Sync {
    /// Adjust the client/document pair for one call.
    fn pre_process(&self, client: TikaClient, file: FileDocument) -> (TikaClient, FileDocument);
}

/// Hook that changes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityPreProcess;

impl PreProcessFile for IdentityPreProcess {
    fn pre_process(&self, client: TikaClient, file: FileDocument) -> (TikaClient, FileDocument) {
        (client, file)
    }
}

impl<F> PreProcessFile for F
where
    F: Fn(TikaClient, FileDocument) -> (TikaClient, FileDocument) + Send + Sync,
{
    fn pre_process(&self, client: TikaClient, file: FileDocument) -> (TikaClient, FileDocument) {
        self(client, file)
    }
}
