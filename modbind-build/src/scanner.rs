//! Source file scanner for discovering `#[js_module]` traits.

use crate::model::{MemberBinding, ModuleBinding, Parameter};
use crate::skip::{SkipReason, Skipped};
use anyhow::{Context, Result, bail};
use quote::ToTokens;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use syn::{
    Attribute, FnArg, GenericArgument, Item, ItemTrait, ItemUse, LitStr, Pat, PathArguments, ReturnType, TraitItem,
    TraitItemFn, Type, TypeParamBound, UseTree, Visibility,
};
use walkdir::WalkDir;

const MODULE_ATTR: &str = "js_module";
const EXPORT_ATTR: &str = "js_export";
const DEFAULT_EXPORT_ATTR: &str = "js_default_export";
const NAME_ATTR: &str = "js_name";
const MARKER_TRAIT: &str = "JsInterop";
const RESULT_WRAPPER: &str = "InteropResult";

/// Bindings discovered in source, plus everything that was left out.
#[derive(Debug, Default)]
pub struct Extraction {
    pub bindings: Vec<ModuleBinding>,
    pub skipped: Vec<Skipped>,
}

impl Extraction {
    pub fn extend(&mut self, other: Extraction) {
        self.bindings.extend(other.bindings);
        self.skipped.extend(other.skipped);
    }
}

/// Scan a directory recursively for Rust files declaring bound traits.
///
/// Files are visited in file-name order so repeated scans yield the same
/// binding order. Files that cannot be read or parsed are ignored.
///
/// Unlike [`scan_file`], this also sees the `mod name;` declarations of
/// parent modules, so traits under a private file module are skipped as
/// [`SkipReason::NotVisible`].
pub fn scan_directory(path: &Path, crate_name: &str) -> Result<Extraction> {
    if !path.exists() {
        bail!("scan path {} does not exist", path.display());
    }

    let mut parsed = Vec::new();
    for entry in WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs") && !is_excluded(e.path(), path))
    {
        let file_path = entry.path();
        match parse_source(file_path) {
            Ok(syntax) => parsed.push((compute_module_path(file_path, path, crate_name), syntax)),
            Err(err) => log::debug!("modbind-build: ignoring {}: {err:#}", file_path.display()),
        }
    }

    let mut hidden = HashSet::new();
    for (namespace, syntax) in &parsed {
        collect_hidden_modules(&syntax.items, namespace, &mut hidden);
    }

    let mut extraction = Extraction::default();
    for (namespace, syntax) in &parsed {
        let found = extract_file(syntax, namespace);
        extraction.skipped.extend(found.skipped);
        for binding in found.bindings {
            if is_hidden(&binding.namespace, &hidden) {
                extraction
                    .skipped
                    .push(Skipped::interface(binding.interface_name, SkipReason::NotVisible));
            } else {
                extraction.bindings.push(binding);
            }
        }
    }

    Ok(extraction)
}

/// Scan a single Rust file.
pub fn scan_file(file_path: &Path, base_path: &Path, crate_name: &str) -> Result<Extraction> {
    let syntax = parse_source(file_path)?;
    let namespace = compute_module_path(file_path, base_path, crate_name);
    Ok(extract_file(&syntax, &namespace))
}

fn parse_source(file_path: &Path) -> Result<syn::File> {
    let content =
        fs::read_to_string(file_path).with_context(|| format!("Failed to read {}", file_path.display()))?;
    syn::parse_file(&content).with_context(|| format!("Failed to parse {}", file_path.display()))
}

/// Extract bindings from an already parsed file whose items live in `namespace`.
pub fn extract_file(file: &syn::File, namespace: &str) -> Extraction {
    let mut extraction = Extraction::default();
    extract_items(&file.items, namespace, true, &mut extraction);
    extraction
}

/// `visible` is false once an enclosing inline module is private.
fn extract_items(items: &[Item], namespace: &str, visible: bool, out: &mut Extraction) {
    let imports = collect_imports(items, namespace);

    for item in items {
        match item {
            Item::Trait(item_trait) => {
                let nameable = visible && is_nameable(&item_trait.vis, namespace);
                if let Some(binding) = extract_trait(item_trait, namespace, nameable, &imports, &mut out.skipped) {
                    out.bindings.push(binding);
                }
            }
            Item::Mod(item_mod) => {
                if let Some((_, content)) = &item_mod.content {
                    let nested = join_path(namespace, &item_mod.ident.to_string());
                    let nested_visible = visible && is_nameable(&item_mod.vis, namespace);
                    extract_items(content, &nested, nested_visible, out);
                }
            }
            _ => {}
        }
    }
}

/// Record file modules (`mod name;`) that the generated code cannot reach.
fn collect_hidden_modules(items: &[Item], namespace: &str, hidden: &mut HashSet<String>) {
    for item in items {
        if let Item::Mod(item_mod) = item {
            let child = join_path(namespace, &item_mod.ident.to_string());
            match &item_mod.content {
                Some((_, content)) => collect_hidden_modules(content, &child, hidden),
                None if !is_nameable(&item_mod.vis, namespace) => {
                    hidden.insert(child);
                }
                None => {}
            }
        }
    }
}

fn is_hidden(namespace: &str, hidden: &HashSet<String>) -> bool {
    let mut prefix = String::new();
    for segment in namespace.split("::") {
        prefix = join_path(&prefix, segment);
        if hidden.contains(&prefix) {
            return true;
        }
    }
    false
}

/// Whether an item declared in `namespace` can be named from another module
/// of the crate, such as the generated one.
///
/// Private items are only visible to their module's descendants, so they
/// qualify only at the crate root.
fn is_nameable(vis: &Visibility, namespace: &str) -> bool {
    let depth = namespace.split("::").filter(|segment| !segment.is_empty()).count().max(1);
    match vis {
        Visibility::Public(_) => true,
        Visibility::Inherited => depth == 1,
        Visibility::Restricted(restricted) => {
            let path = &restricted.path;
            if path.is_ident("crate") {
                true
            } else if path.is_ident("super") {
                depth <= 2
            } else if path.is_ident("self") {
                depth == 1
            } else {
                false
            }
        }
    }
}

fn join_path(namespace: &str, segment: &str) -> String {
    if namespace.is_empty() {
        segment.to_string()
    } else {
        format!("{namespace}::{segment}")
    }
}

/// `use` items of a module, rewritten to resolve from anywhere in the crate.
fn collect_imports(items: &[Item], namespace: &str) -> Vec<String> {
    let local_modules: HashSet<String> = items
        .iter()
        .filter_map(|item| match item {
            Item::Mod(item_mod) => Some(item_mod.ident.to_string()),
            _ => None,
        })
        .collect();

    items
        .iter()
        .filter_map(|item| match item {
            Item::Use(item_use) => anchor_use(item_use, namespace, &local_modules),
            _ => None,
        })
        .map(|item_use| item_use.to_token_stream().to_string())
        .collect()
}

/// Anchor `self::`, `super::` and child-module paths at `namespace`.
///
/// `use super::super::types::DomRect;` in `crate::interop::utilities` becomes
/// `use crate::types::DomRect;`. Paths climbing above the crate root are
/// dropped. Visibility is stripped.
fn anchor_use(item_use: &ItemUse, namespace: &str, local_modules: &HashSet<String>) -> Option<ItemUse> {
    let mut base: Vec<&str> = namespace.split("::").filter(|segment| !segment.is_empty()).collect();
    let mut tree = &item_use.tree;
    let mut anchored = false;

    if item_use.leading_colon.is_none() {
        while let UseTree::Path(path) = tree {
            if path.ident == "self" && !anchored {
                anchored = true;
            } else if path.ident == "super" {
                if base.len() <= 1 {
                    return None;
                }
                base.pop();
                anchored = true;
            } else {
                break;
            }
            tree = &path.tree;
        }

        if !anchored
            && let UseTree::Path(path) = tree
            && local_modules.contains(&path.ident.to_string())
        {
            anchored = true;
        }
    }

    if !anchored {
        if item_use.leading_colon.is_none() && has_relative_root(tree) {
            return None;
        }
        let mut item_use = item_use.clone();
        item_use.vis = Visibility::Inherited;
        return Some(item_use);
    }

    if base.is_empty() {
        return None;
    }
    let source = format!("use {}::{};", base.join("::"), tree.to_token_stream());
    let mut anchored_use: ItemUse = syn::parse_str(&source).ok()?;
    anchored_use.attrs = item_use.attrs.clone();
    Some(anchored_use)
}

fn has_relative_root(tree: &UseTree) -> bool {
    match tree {
        UseTree::Path(path) => path.ident == "self" || path.ident == "super",
        UseTree::Name(name) => name.ident == "self" || name.ident == "super",
        UseTree::Rename(rename) => rename.ident == "self" || rename.ident == "super",
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(has_relative_root),
    }
}

/// Build a binding for one trait, recording anything dropped along the way.
///
/// Traits the generated proxy could not name or fully implement produce no
/// binding at all.
fn extract_trait(
    item: &ItemTrait,
    namespace: &str,
    nameable: bool,
    imports: &[String],
    skipped: &mut Vec<Skipped>,
) -> Option<ModuleBinding> {
    let name = item.ident.to_string();
    let has_marker = extends_marker(item);
    let module_attr = find_attr(&item.attrs, MODULE_ATTR);

    if !has_marker {
        if module_attr.is_some() {
            skipped.push(Skipped::interface(name, SkipReason::MissingMarker));
        }
        return None;
    }

    let Some(module_path) = module_attr.and_then(string_arg) else {
        skipped.push(Skipped::interface(name, SkipReason::MissingModule));
        return None;
    };

    if !nameable {
        skipped.push(Skipped::interface(name, SkipReason::NotVisible));
        return None;
    }

    if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
        skipped.push(Skipped::interface(name, SkipReason::GenericTrait));
        return None;
    }

    if let Some(associated) = item.items.iter().find_map(required_associated_item) {
        skipped.push(Skipped::interface(name, SkipReason::AssociatedItem { name: associated }));
        return None;
    }

    let mut binding = ModuleBinding::new(&name, namespace, module_path);
    binding.export_prefix = resolve_export_prefix(&item.attrs);
    binding.imports = imports.to_vec();

    let mut seen = HashSet::new();
    let mut unbound = Vec::new();
    for method in item.items.iter().filter_map(|trait_item| match trait_item {
        TraitItem::Fn(method) => Some(method),
        _ => None,
    }) {
        let member_name = method.sig.ident.to_string();

        if let Err(reason) = check_callable(method) {
            if reason != SkipReason::ProvidedMethod {
                unbound.push(member_name.clone());
            }
            skipped.push(Skipped::member(&name, member_name, reason));
            continue;
        }

        if !seen.insert(member_name.clone()) {
            skipped.push(Skipped::member(&name, member_name, SkipReason::DuplicateMember));
            continue;
        }

        match extract_member(method) {
            Ok(member) => {
                binding.push_member(member);
            }
            Err(reason) => {
                unbound.push(member_name.clone());
                skipped.push(Skipped::member(&name, member_name, reason));
            }
        }
    }

    if !unbound.is_empty() {
        skipped.push(Skipped::interface(
            name,
            SkipReason::UnboundRequiredMembers { members: unbound },
        ));
        return None;
    }

    if binding.members.is_empty() {
        skipped.push(Skipped::interface(name, SkipReason::NoMembers));
        return None;
    }

    Some(binding)
}

/// Associated consts and types without defaults, and item macros.
fn required_associated_item(item: &TraitItem) -> Option<String> {
    match item {
        TraitItem::Const(item_const) if item_const.default.is_none() => Some(item_const.ident.to_string()),
        TraitItem::Type(item_type) if item_type.default.is_none() => Some(item_type.ident.to_string()),
        TraitItem::Macro(item_macro) => Some(format!("{}!", item_macro.mac.path.to_token_stream())),
        _ => None,
    }
}

/// Only required `&self` methods take part in binding.
fn check_callable(method: &TraitItemFn) -> Result<(), SkipReason> {
    if method.default.is_some() {
        return Err(SkipReason::ProvidedMethod);
    }
    match method.sig.receiver() {
        Some(receiver) if receiver.colon_token.is_none() && receiver.reference.is_some() && receiver.mutability.is_none() => {
            Ok(())
        }
        _ => Err(SkipReason::NotCallable),
    }
}

fn extract_member(method: &TraitItemFn) -> Result<MemberBinding, SkipReason> {
    let sig = &method.sig;
    if sig.asyncness.is_none() {
        return Err(SkipReason::NotAsync);
    }
    if !sig.generics.params.is_empty() {
        return Err(SkipReason::Generic);
    }

    let result_shape = result_shape(&sig.output)?;

    let parameters = sig
        .inputs
        .iter()
        .filter_map(|input| match input {
            FnArg::Typed(pat_type) => Some(pat_type),
            FnArg::Receiver(_) => None,
        })
        .enumerate()
        .map(|(index, pat_type)| Parameter {
            type_name: type_string(&pat_type.ty),
            name: match pat_type.pat.as_ref() {
                Pat::Ident(pat_ident) => pat_ident.ident.to_string(),
                _ => format!("arg{index}"),
            },
        })
        .collect();

    let name = sig.ident.to_string();
    let mut member = MemberBinding::new(&name);
    if let Some(wire_name) = find_attr(&method.attrs, NAME_ATTR).and_then(string_arg) {
        member = member.wire_name(wire_name);
    }
    member.result_shape = result_shape;
    member.parameters = parameters;
    Ok(member)
}

/// Recognize `InteropResult<T>`; `InteropResult<()>` is the void shape.
fn result_shape(output: &ReturnType) -> Result<Option<String>, SkipReason> {
    let ReturnType::Type(_, ty) = output else {
        return Err(SkipReason::UnsupportedReturn {
            found: "()".to_string(),
        });
    };

    if let Type::Path(type_path) = ty.as_ref()
        && type_path.qself.is_none()
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == RESULT_WRAPPER
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && args.args.len() == 1
        && let Some(GenericArgument::Type(inner)) = args.args.first()
    {
        return Ok(match inner {
            Type::Tuple(tuple) if tuple.elems.is_empty() => None,
            other => Some(type_string(other)),
        });
    }

    Err(SkipReason::UnsupportedReturn {
        found: type_string(ty),
    })
}

/// Default export wins over a named export; blank names mean no prefix.
fn resolve_export_prefix(attrs: &[Attribute]) -> String {
    if find_attr(attrs, DEFAULT_EXPORT_ATTR).is_some() {
        return crate::model::DEFAULT_EXPORT.to_string();
    }
    find_attr(attrs, EXPORT_ATTR)
        .and_then(string_arg)
        .filter(|export| !export.trim().is_empty())
        .unwrap_or_default()
}

fn extends_marker(item: &ItemTrait) -> bool {
    item.supertraits.iter().any(|bound| match bound {
        TypeParamBound::Trait(trait_bound) => trait_bound
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == MARKER_TRAIT),
        _ => false,
    })
}

/// Match attributes by their last path segment (`js_module` or `modbind::js_module`).
fn find_attr<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs
        .iter()
        .find(|attr| attr.path().segments.last().is_some_and(|segment| segment.ident == name))
}

fn string_arg(attr: &Attribute) -> Option<String> {
    attr.parse_args::<LitStr>().ok().map(|lit| lit.value())
}

fn type_string(ty: &Type) -> String {
    ty.to_token_stream().to_string()
}

fn is_excluded(file_path: &Path, base_path: &Path) -> bool {
    file_path
        .strip_prefix(base_path)
        .unwrap_or(file_path)
        .components()
        .any(|c| c.as_os_str() == "generated" || c.as_os_str() == "target")
}

/// Compute the module path from a file path.
/// e.g., "src/interop/dom.rs" -> "crate::interop::dom"
fn compute_module_path(file_path: &Path, base_path: &Path, crate_name: &str) -> String {
    let relative = file_path.strip_prefix(base_path).unwrap_or(file_path);

    let without_extension = relative.with_extension("");
    let mut parts: Vec<&str> = without_extension
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    // Remove "mod", "lib" or "main" from the end if present
    if let Some(last) = parts.last()
        && (*last == "mod" || *last == "lib" || *last == "main")
    {
        parts.pop();
    }

    if parts.is_empty() {
        crate_name.to_string()
    } else {
        format!("{}::{}", crate_name, parts.join("::"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn extract(code: &str) -> Extraction {
        let file = syn::parse_file(code).unwrap();
        extract_file(&file, "crate::interop")
    }

    #[test]
    fn test_extract_utilities_interop() {
        let extraction = extract(
            r#"
            #[js_module("./js/utilities.js")]
            #[js_export("Utilities")]
            #[async_trait]
            pub trait IUtilitiesInterop: JsInterop {
                #[js_name("focus")]
                async fn focus_async(&self, id: String, selector: String) -> InteropResult<()>;
                #[js_name("getRect")]
                async fn get_rect_async(&self, id: String) -> InteropResult<Option<DomRect>>;
            }
        "#,
        );

        assert!(extraction.skipped.is_empty());
        assert_eq!(extraction.bindings.len(), 1);
        let binding = &extraction.bindings[0];
        assert_eq!(binding.interface_name, "IUtilitiesInterop");
        assert_eq!(binding.namespace, "crate::interop");
        assert_eq!(binding.module_path, "./js/utilities.js");
        assert_eq!(binding.export_prefix, "Utilities");

        let focus = &binding.members[0];
        assert_eq!(focus.name, "focus_async");
        assert_eq!(focus.wire_name, "focus");
        assert_eq!(focus.result_shape, None);
        let names: Vec<_> = focus.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["id", "selector"]);
        assert_eq!(focus.parameters[0].type_name, "String");

        let rect = &binding.members[1];
        assert_eq!(rect.wire_name, "getRect");
        assert_eq!(rect.result_shape.as_deref(), Some("Option < DomRect >"));
        assert_eq!(binding.invocation_path(rect), "Utilities.getRect");
    }

    #[test]
    fn test_default_export_overrides_named_export() {
        let extraction = extract(
            r#"
            #[modbind::js_module("./js/focus.js")]
            #[modbind::js_export("Named")]
            #[modbind::js_default_export]
            pub trait IFocus: modbind::JsInterop {
                #[modbind::js_name("focus")]
                async fn focus(&self) -> modbind::InteropResult<()>;
            }
        "#,
        );

        let binding = &extraction.bindings[0];
        assert_eq!(binding.export_prefix, "default");
        assert_eq!(binding.invocation_path(&binding.members[0]), "default.focus");
    }

    #[test]
    fn test_blank_export_means_no_prefix() {
        let extraction = extract(
            r#"
            #[js_module("./a.js")]
            #[js_export("  ")]
            pub trait IA: JsInterop {
                #[js_name("")]
                async fn run(&self) -> InteropResult<()>;
            }
        "#,
        );

        let binding = &extraction.bindings[0];
        assert_eq!(binding.export_prefix, "");
        assert_eq!(binding.invocation_path(&binding.members[0]), "run");
    }

    #[test]
    fn test_trait_without_module_is_skipped() {
        let extraction = extract(
            r#"
            pub trait INoModule: JsInterop {
                async fn run(&self) -> InteropResult<()>;
            }
        "#,
        );

        assert!(extraction.bindings.is_empty());
        assert_eq!(
            extraction.skipped,
            vec![Skipped::interface("INoModule", SkipReason::MissingModule)]
        );
    }

    #[test]
    fn test_trait_without_marker_is_skipped() {
        let extraction = extract(
            r#"
            #[js_module("./a.js")]
            pub trait IUnmarked {
                async fn run(&self) -> InteropResult<()>;
            }
        "#,
        );

        assert!(extraction.bindings.is_empty());
        assert_eq!(extraction.skipped[0].reason, SkipReason::MissingMarker);
    }

    #[test]
    fn test_unrelated_traits_are_ignored() {
        let extraction = extract(
            r#"
            pub trait Plain {
                fn run(&self);
            }
        "#,
        );

        assert!(extraction.bindings.is_empty());
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn test_unbound_required_members_skip_the_trait() {
        let extraction = extract(
            r#"
            #[js_module("./a.js")]
            pub trait IMixed: JsInterop {
                async fn kept(&self) -> InteropResult<u32>;
                fn not_async(&self) -> InteropResult<u32>;
                async fn bare(&self) -> u32;
                async fn no_return(&self);
                async fn generic<T: Send>(&self, value: T) -> InteropResult<()>;
                async fn associated() -> InteropResult<()>;
            }
        "#,
        );

        assert!(extraction.bindings.is_empty());

        let (members, traits): (Vec<_>, Vec<_>) = extraction.skipped.iter().partition(|s| s.member.is_some());
        let reasons: Vec<_> = members
            .iter()
            .map(|s| (s.member.as_deref().unwrap(), s.reason.clone()))
            .collect();
        assert_eq!(
            reasons,
            vec![
                ("not_async", SkipReason::NotAsync),
                (
                    "bare",
                    SkipReason::UnsupportedReturn {
                        found: "u32".to_string()
                    }
                ),
                (
                    "no_return",
                    SkipReason::UnsupportedReturn {
                        found: "()".to_string()
                    }
                ),
                ("generic", SkipReason::Generic),
                ("associated", SkipReason::NotCallable),
            ]
        );
        assert_eq!(
            traits,
            vec![&Skipped::interface(
                "IMixed",
                SkipReason::UnboundRequiredMembers {
                    members: ["not_async", "bare", "no_return", "generic", "associated"]
                        .map(String::from)
                        .to_vec()
                }
            )]
        );
    }

    #[test]
    fn test_provided_members_are_left_to_the_trait() {
        let extraction = extract(
            r#"
            #[js_module("./a.js")]
            pub trait IHelpers: JsInterop {
                async fn kept(&self) -> InteropResult<u32>;
                async fn provided(&self) -> u32 { 1 }
                fn sync_helper(&self) -> InteropResult<()> { Ok(()) }
                const LIMIT: usize = 4;
            }
        "#,
        );

        let binding = &extraction.bindings[0];
        let names: Vec<_> = binding.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["kept"]);
        assert_eq!(
            extraction.skipped,
            vec![
                Skipped::member("IHelpers", "provided", SkipReason::ProvidedMethod),
                Skipped::member("IHelpers", "sync_helper", SkipReason::ProvidedMethod),
            ]
        );
    }

    #[test]
    fn test_associated_items_skip_the_trait() {
        let extraction = extract(
            r#"
            #[js_module("./a.js")]
            pub trait ILimits: JsInterop {
                const LIMIT: usize;
                async fn run(&self) -> InteropResult<()>;
            }

            #[js_module("./b.js")]
            pub trait IOutput: JsInterop {
                type Output;
                async fn run(&self) -> InteropResult<()>;
            }
        "#,
        );

        assert!(extraction.bindings.is_empty());
        assert_eq!(
            extraction.skipped,
            vec![
                Skipped::interface(
                    "ILimits",
                    SkipReason::AssociatedItem {
                        name: "LIMIT".to_string()
                    }
                ),
                Skipped::interface(
                    "IOutput",
                    SkipReason::AssociatedItem {
                        name: "Output".to_string()
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_generic_traits_are_skipped() {
        let extraction = extract(
            r#"
            #[js_module("./a.js")]
            pub trait IStore<T>: JsInterop {
                async fn get(&self) -> InteropResult<T>;
            }

            #[js_module("./b.js")]
            pub trait IBounded: JsInterop where Self: Sized {
                async fn get(&self) -> InteropResult<u8>;
            }
        "#,
        );

        assert!(extraction.bindings.is_empty());
        let reasons: Vec<_> = extraction.skipped.iter().map(|s| s.reason.clone()).collect();
        assert_eq!(reasons, [SkipReason::GenericTrait, SkipReason::GenericTrait]);
    }

    #[test]
    fn test_private_traits_are_skipped() {
        let extraction = extract(
            r#"
            #[js_module("./a.js")]
            trait IPrivate: JsInterop {
                async fn run(&self) -> InteropResult<()>;
            }

            #[js_module("./b.js")]
            pub(crate) trait ICrate: JsInterop {
                async fn run(&self) -> InteropResult<()>;
            }

            mod inner {
                #[js_module("./c.js")]
                pub trait IInner: JsInterop {
                    async fn run(&self) -> InteropResult<()>;
                }
            }
        "#,
        );

        let bound: Vec<_> = extraction.bindings.iter().map(|b| b.interface_name.as_str()).collect();
        assert_eq!(bound, ["ICrate"]);
        assert_eq!(
            extraction.skipped,
            vec![
                Skipped::interface("IPrivate", SkipReason::NotVisible),
                Skipped::interface("IInner", SkipReason::NotVisible),
            ]
        );
    }

    #[test]
    fn test_private_traits_at_crate_root_are_visible() {
        let file = syn::parse_file(
            r#"
            #[js_module("./a.js")]
            trait IRoot: JsInterop {
                async fn run(&self) -> InteropResult<()>;
            }
        "#,
        )
        .unwrap();
        let extraction = extract_file(&file, "crate");

        assert_eq!(extraction.bindings.len(), 1);
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn test_duplicate_member_keeps_first() {
        let extraction = extract(
            r#"
            #[js_module("./a.js")]
            pub trait IDup: JsInterop {
                #[cfg(feature = "a")]
                #[js_name("first")]
                async fn run(&self) -> InteropResult<()>;
                #[cfg(not(feature = "a"))]
                #[js_name("second")]
                async fn run(&self, extra: u8) -> InteropResult<()>;
            }
        "#,
        );

        let binding = &extraction.bindings[0];
        assert_eq!(binding.members.len(), 1);
        assert_eq!(binding.members[0].wire_name, "first");
        assert_eq!(
            extraction.skipped,
            vec![Skipped::member("IDup", "run", SkipReason::DuplicateMember)]
        );
    }

    #[test]
    fn test_trait_with_no_bindable_members_is_discarded() {
        let extraction = extract(
            r#"
            #[js_module("./a.js")]
            pub trait IEmpty: JsInterop {
                fn helper(&self) -> u8 { 0 }
            }
        "#,
        );

        assert!(extraction.bindings.is_empty());
        assert_eq!(
            extraction.skipped.last(),
            Some(&Skipped::interface("IEmpty", SkipReason::NoMembers))
        );
    }

    fn compact(source: &str) -> String {
        source.split_whitespace().collect()
    }

    #[test]
    fn test_nested_modules_and_imports() {
        let extraction = extract(
            r#"
            pub use crate::types::DomRect;

            pub mod dom {
                use ::serde::Serialize;
                use self::local::Thing;

                #[js_module("./dom.js")]
                pub trait IDom: JsInterop {
                    async fn rect(&self, pattern: (u8, u8)) -> InteropResult<DomRect>;
                }
            }
        "#,
        );

        let binding = &extraction.bindings[0];
        assert_eq!(binding.namespace, "crate::interop::dom");
        let imports: Vec<_> = binding.imports.iter().map(|import| compact(import)).collect();
        assert_eq!(
            imports,
            ["use::serde::Serialize;", "usecrate::interop::dom::local::Thing;"]
        );
        assert_eq!(binding.members[0].parameters[0].name, "pattern");
    }

    #[test]
    fn test_relative_imports_are_anchored_at_the_namespace() {
        let file = syn::parse_file(
            r#"
            use super::super::types::DomRect;
            use super::{Shared, helpers::*};
            pub(crate) use self::options::Alignment;
            use options::Direction as Dir;
            use serde::Deserialize;
            use super::super::super::Outside;

            pub mod options {}

            #[js_module("./js/utilities.js")]
            pub trait IUtilitiesInterop: JsInterop {
                async fn get_rect_async(&self, id: &str) -> InteropResult<Option<DomRect>>;
            }
        "#,
        )
        .unwrap();
        let extraction = extract_file(&file, "crate::interop::utilities");

        let imports: Vec<_> = extraction.bindings[0].imports.iter().map(|import| compact(import)).collect();
        assert_eq!(
            imports,
            [
                "usecrate::types::DomRect;",
                "usecrate::interop::{Shared,helpers::*};",
                "usecrate::interop::utilities::options::Alignment;",
                "usecrate::interop::utilities::options::DirectionasDir;",
                "useserde::Deserialize;",
            ]
        );
        assert_eq!(
            extraction.bindings[0].members[0].parameters[0].type_name,
            "& str"
        );
    }

    #[test]
    fn test_pattern_parameters_get_positional_names() {
        let extraction = extract(
            r#"
            #[js_module("./a.js")]
            pub trait IPoint: JsInterop {
                async fn move_to(&self, (x, y): (i32, i32), _: bool) -> InteropResult<()>;
            }
        "#,
        );

        let names: Vec<_> = extraction.bindings[0].members[0]
            .parameters
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, ["arg0", "arg1"]);
    }

    #[test]
    fn test_compute_module_path() {
        let base = PathBuf::from("src");
        assert_eq!(compute_module_path(&base.join("lib.rs"), &base, "crate"), "crate");
        assert_eq!(
            compute_module_path(&base.join("interop/mod.rs"), &base, "crate"),
            "crate::interop"
        );
        assert_eq!(
            compute_module_path(&base.join("interop/dom.rs"), &base, "crate"),
            "crate::interop::dom"
        );
    }
}
