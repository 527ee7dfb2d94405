use pretty_assertions::assert_eq;

use super::*;
use crate::value::Value;

fn nothing(_: &mut Interpreter) -> Flow {
    Ok(())
}

fn nothing_method(_: &mut Interpreter, _: &Place) -> Flow {
    Ok(())
}

fn variable(scopes: &mut ScopeStack, name: &[u8]) -> Option<Value> {
    match scopes.resolve(name)? {
        Resolved::Variable { level } => scopes.variable_mut(level, name).cloned(),
        _ => None,
    }
}

#[test]
fn inner_level_shadows_outer() {
    let mut sources = Sources::new();
    let mut scopes = ScopeStack::new();
    assert!(scopes.declare(b"x", Binding::Variable(Value::Integer(1))));
    scopes.push_scope();
    assert!(scopes.declare(b"x", Binding::Variable(Value::Integer(2))));
    assert_eq!(variable(&mut scopes, b"x"), Some(Value::Integer(2)));
    scopes.pop_scope(&mut sources);
    assert_eq!(variable(&mut scopes, b"x"), Some(Value::Integer(1)));
}

#[test]
fn redeclaring_overwrites_in_place() {
    let mut scopes = ScopeStack::new();
    scopes.declare(b"x", Binding::Variable(Value::Integer(1)));
    scopes.declare(b"x", Binding::Variable(Value::Integer(5)));
    assert_eq!(variable(&mut scopes, b"x"), Some(Value::Integer(5)));
}

#[test]
fn primitives_cannot_be_redeclared() {
    let mut scopes = ScopeStack::new();
    scopes.register_primitive("print", nothing);
    scopes.push_scope();
    assert!(!scopes.declare(b"print", Binding::Variable(Value::None)));
    assert!(matches!(scopes.resolve(b"print"), Some(Resolved::Primitive(_))));
}

#[test]
fn unknown_names_do_not_resolve() {
    let scopes = ScopeStack::new();
    assert!(scopes.resolve(b"nope").is_none());
    assert!(scopes.lookup_method(b"nope").is_none());
}

#[test]
fn code_bindings_resolve_with_their_kind() {
    let mut sources = Sources::new();
    let at = CodePtr::start(sources.load(b";x"));
    let mut scopes = ScopeStack::new();
    scopes.declare(b"m", Binding::Macro(at));
    match scopes.resolve(b"m") {
        Some(Resolved::Code(code)) => {
            assert_eq!(code.kind, CodeKind::Macro);
            assert!(!code.is_scoped());
        }
        _ => panic!("expected a code binding"),
    }
    assert_eq!(scopes.lookup(b"m").map(Binding::kind_name), Some("macro"));
}

#[test]
fn primitive_methods_win_over_user_methods() {
    let mut sources = Sources::new();
    let at = CodePtr::start(sources.load(b";x"));
    let mut scopes = ScopeStack::new();
    scopes.register_method("length", nothing_method);
    assert!(!scopes.declare_method(b"length", Method::User(at)));
    assert!(scopes.declare_method(b"double", Method::User(at)));
    assert!(matches!(scopes.lookup_method(b"double"), Some(Method::User(_))));
}

#[test]
fn user_methods_vanish_with_their_level() {
    let mut sources = Sources::new();
    let at = CodePtr::start(sources.load(b";x"));
    let mut scopes = ScopeStack::new();
    scopes.push_scope();
    scopes.declare_method(b"double", Method::User(at));
    scopes.pop_scope(&mut sources);
    assert!(scopes.lookup_method(b"double").is_none());
}

#[test]
fn popping_releases_owned_texts_and_libraries() {
    let mut sources = Sources::new();
    let mut scopes = ScopeStack::new();
    scopes.push_scope();
    let owned = sources.load(b"{a}");
    let library = sources.load(b"{b}");
    scopes.own_source(owned);
    scopes.record_library(b"lib", library, &mut sources);
    assert_eq!(scopes.find_library(b"lib"), Some(library));
    scopes.pop_scope(&mut sources);
    assert!(!sources.is_live(owned));
    assert!(!sources.is_live(library));
    assert_eq!(scopes.find_library(b"lib"), None);
}

#[test]
fn libraries_are_found_from_inner_levels() {
    let mut sources = Sources::new();
    let mut scopes = ScopeStack::new();
    let library = sources.load(b"{b}");
    scopes.record_library(b"lib", library, &mut sources);
    scopes.push_scope();
    assert_eq!(scopes.find_library(b"lib"), Some(library));
}

#[test]
#[should_panic(expected = "pop of outermost scope")]
fn outermost_level_cannot_be_popped() {
    let mut sources = Sources::new();
    let mut scopes = ScopeStack::new();
    scopes.pop_scope(&mut sources);
}
