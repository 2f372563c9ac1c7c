// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::capabilities::Capabilities;

/// The surface of a processing stage that the orderer depends on.
///
/// The orderer does not need to know what a stage *does*, only what it touches.
/// Implementations must be side-effect free; the orderer treats descriptors as
/// read-only and may share them across threads.
pub trait StageDescriptor {
    /// Display name, used only for diagnostics
    fn name(&self) -> &str;

    fn capabilities(&self) -> &Capabilities;
}

impl<T: StageDescriptor + ?Sized> StageDescriptor for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn capabilities(&self) -> &Capabilities {
        (**self).capabilities()
    }
}

impl<T: StageDescriptor + ?Sized> StageDescriptor for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn capabilities(&self) -> &Capabilities {
        (**self).capabilities()
    }
}

impl<T: StageDescriptor + ?Sized> StageDescriptor for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn capabilities(&self) -> &Capabilities {
        (**self).capabilities()
    }
}
