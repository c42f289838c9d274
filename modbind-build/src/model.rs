//! Descriptor model: plain data describing the traits to bind.

use crate::naming::{proxy_type_name, to_snake_case};

/// Export prefix used for a module's default export.
pub const DEFAULT_EXPORT: &str = "default";

/// One trait bound to a script module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleBinding {
    /// The trait name (e.g., "IUtilitiesInterop")
    pub interface_name: String,
    /// The module path where the trait is defined (e.g., "crate::interop")
    pub namespace: String,
    /// Location of the script module, passed through verbatim.
    pub module_path: String,
    /// Empty, a named export, or [`DEFAULT_EXPORT`].
    pub export_prefix: String,
    /// Members in declaration order, unique by name.
    pub members: Vec<MemberBinding>,
    /// `use` declarations forwarded into the generated proxy.
    pub imports: Vec<String>,
}

impl ModuleBinding {
    pub fn new(
        interface_name: impl Into<String>,
        namespace: impl Into<String>,
        module_path: impl Into<String>,
    ) -> Self {
        Self {
            interface_name: interface_name.into(),
            namespace: namespace.into(),
            module_path: module_path.into(),
            export_prefix: String::new(),
            members: Vec::new(),
            imports: Vec::new(),
        }
    }

    /// Bind members to a named export of the module.
    pub fn with_export(mut self, export: impl Into<String>) -> Self {
        self.export_prefix = export.into();
        self
    }

    /// Bind members to the module's default export.
    pub fn with_default_export(mut self) -> Self {
        self.export_prefix = DEFAULT_EXPORT.to_string();
        self
    }

    pub fn with_member(mut self, member: MemberBinding) -> Self {
        self.push_member(member);
        self
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Append a member unless one with the same name already exists.
    ///
    /// Returns `false` when the member was dropped as a duplicate.
    pub fn push_member(&mut self, member: MemberBinding) -> bool {
        if self.members.iter().any(|existing| existing.name == member.name) {
            return false;
        }
        self.members.push(member);
        true
    }

    /// Name of the generated proxy type.
    pub fn proxy_name(&self) -> String {
        proxy_type_name(&self.interface_name)
    }

    /// Name of the module file the proxy is emitted into, without extension.
    pub fn proxy_module(&self) -> String {
        to_snake_case(&self.proxy_name())
    }

    /// The export path a member is invoked through.
    pub fn invocation_path(&self, member: &MemberBinding) -> String {
        if self.export_prefix.is_empty() {
            member.wire_name.clone()
        } else {
            format!("{}.{}", self.export_prefix, member.wire_name)
        }
    }
}

/// One callable exposed through a proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBinding {
    /// Method name declared on the trait.
    pub name: String,
    /// Name the script function is invoked by.
    pub wire_name: String,
    /// The `T` of `InteropResult<T>`, or `None` for `InteropResult<()>`.
    pub result_shape: Option<String>,
    pub parameters: Vec<Parameter>,
}

impl MemberBinding {
    /// A void member whose wire name equals its method name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            wire_name: name.clone(),
            name,
            result_shape: None,
            parameters: Vec::new(),
        }
    }

    /// Override the wire name. Blank overrides are ignored.
    pub fn wire_name(mut self, wire_name: impl Into<String>) -> Self {
        let wire_name = wire_name.into();
        if !wire_name.trim().is_empty() {
            self.wire_name = wire_name;
        }
        self
    }

    pub fn returns(mut self, shape: impl Into<String>) -> Self {
        self.result_shape = Some(shape.into());
        self
    }

    pub fn param(mut self, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            type_name: type_name.into(),
            name: name.into(),
        });
        self
    }
}

/// A positional parameter forwarded to the script function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Type as written in the trait (e.g., "Option<String>")
    pub type_name: String,
    pub name: String,
}
