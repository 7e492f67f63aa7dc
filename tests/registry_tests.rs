//! Module registry tests

use core::fmt::Write;

use modshell::{Args, CommandDescriptor, Registry, ShellError};

fn nop(_args: &Args<'_>, _out: &mut dyn Write) -> Result<(), ShellError> {
    Ok(())
}

static NET_COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "up",
        handler: nop,
        help: None,
    },
    CommandDescriptor {
        name: "down",
        handler: nop,
        help: None,
    },
];

static GPIO_COMMANDS: &[CommandDescriptor] = &[CommandDescriptor {
    name: "set",
    handler: nop,
    help: None,
}];

#[test]
fn test_register_and_find() {
    let mut registry: Registry<4> = Registry::new();

    registry.register("net", NET_COMMANDS).unwrap();
    registry.register("gpio", GPIO_COMMANDS).unwrap();

    assert_eq!(registry.find("net"), Some(0));
    assert_eq!(registry.find("gpio"), Some(1));
    assert_eq!(registry.find("spi"), None);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_find_first_match_wins() {
    let mut registry: Registry<4> = Registry::new();

    registry.register("net", NET_COMMANDS).unwrap();
    registry.register("net", GPIO_COMMANDS).unwrap();

    assert_eq!(registry.find("net"), Some(0));
}

#[test]
fn test_register_past_capacity_fails() {
    let mut registry: Registry<2> = Registry::new();

    registry.register("net", NET_COMMANDS).unwrap();
    registry.register("gpio", GPIO_COMMANDS).unwrap();

    assert_eq!(
        registry.register("spi", GPIO_COMMANDS),
        Err(ShellError::RegistryFull)
    );
    assert_eq!(
        registry.register("i2c", GPIO_COMMANDS),
        Err(ShellError::RegistryFull)
    );

    // earlier registrations are undisturbed
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find("net"), Some(0));
    assert_eq!(registry.find("gpio"), Some(1));
}

#[test]
fn test_find_is_exact_for_short_names() {
    let mut registry: Registry<4> = Registry::new();
    registry.register("net", NET_COMMANDS).unwrap();

    assert_eq!(registry.find("ne"), None);
    assert_eq!(registry.find("netx"), None);
}

#[test]
fn test_find_compares_bounded_length() {
    let mut registry: Registry<4> = Registry::new();

    // exactly at the 20-character maximum
    registry
        .register("abcdefghijklmnopqrst", NET_COMMANDS)
        .unwrap();

    // longer text matching the first 20 characters still resolves
    assert_eq!(registry.find("abcdefghijklmnopqrstuvwx"), Some(0));
}

#[test]
fn test_get_and_iter() {
    let mut registry: Registry<4> = Registry::new();

    registry.register("net", NET_COMMANDS).unwrap();

    let entry = registry.get(0).unwrap();
    assert_eq!(entry.name, "net");
    assert_eq!(entry.commands.len(), 2);
    assert!(registry.get(1).is_none());

    let names: Vec<&str> = registry.iter().map(|m| m.name).collect();
    assert_eq!(names, ["net"]);
}
