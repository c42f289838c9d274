//! Auto-generated registration of module proxies. Do not edit manually.
//!
//! Generated by modbind-build.
#![allow(unused_imports)]
use crate::interop::focus::*;
use crate::interop::text::*;
use crate::interop::utilities::*;
/// Register every generated proxy with a scoped lifetime.
///
/// Each scope gets its own proxy instance, and with it its own module load.
pub fn add_module_proxies(
    services: &mut ::modbind::ServiceCollection,
) -> &mut ::modbind::ServiceCollection {
    services
        .add_scoped::<
            dyn IFocusInterop,
            super::focus_interop::FocusInterop,
        >(
            super::focus_interop::FocusInterop::new,
            super::focus_interop::FocusInterop::into_interface,
        );
    services
        .add_scoped::<
            dyn ITextInterop,
            super::text_interop::TextInterop,
        >(
            super::text_interop::TextInterop::new,
            super::text_interop::TextInterop::into_interface,
        );
    services
        .add_scoped::<
            dyn IUtilitiesInterop,
            super::utilities_interop::UtilitiesInterop,
        >(
            super::utilities_interop::UtilitiesInterop::new,
            super::utilities_interop::UtilitiesInterop::into_interface,
        );
    services
}
