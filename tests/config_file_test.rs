//! Loading and saving configuration files

use sshconf::{Config, Destination, EntryArgs, Source, SshConfigError};
use tempfile::tempdir;

#[test]
fn test_save_and_load_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("config");

    let mut config = Config::new();
    config.set(None, ("User", "root"))?;
    config.set(Some("web"), EntryArgs::options([("HostName", "10.0.0.8"), ("Port", "8022")]))?;
    config.save(&path)?;

    let mut loaded = Config::new();
    loaded.load(&path, false)?;
    assert_eq!(loaded.to_string(), config.to_string());
    assert_eq!(loaded.get_option(Some("web"), "Port"), Some("8022"));
    Ok(())
}

#[test]
fn test_save_truncates_existing_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("config");
    std::fs::write(&path, "Host old\n    User legacy\n".repeat(20))?;

    let mut config = Config::new();
    config.set(Some("new"), ("User", "fresh"))?;
    config.save(Destination::from(&path))?;

    assert_eq!(std::fs::read_to_string(&path)?, "Host new\n    User fresh");
    Ok(())
}

#[test]
fn test_load_directory_is_unsupported() {
    let temp_dir = tempdir().unwrap();
    let mut config = Config::new();
    let err = config.load(temp_dir.path(), false).unwrap_err();
    assert!(matches!(err, SshConfigError::UnsupportedSource { .. }));

    let err = config.save(temp_dir.path()).unwrap_err();
    assert!(matches!(err, SshConfigError::UnsupportedSource { .. }));
}

#[test]
fn test_load_with_update_preserves_priority() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let base = temp_dir.path().join("base");
    let extra = temp_dir.path().join("extra");
    std::fs::write(&base, "Host a\n    User one\nHost b\n    User two\n")?;
    std::fs::write(&extra, "Host x\n    User x\nHost y\n    User y\nHost a\n    User uno\n")?;

    let mut config = Config::new();
    config.load(&base, false)?;
    let priority_before = config.get(Some("a")).map(|e| e.priority());
    config.load(&extra, true)?;

    let a = config.get(Some("a")).unwrap();
    assert_eq!(Some(a.priority()), priority_before);
    assert_eq!(a.get("User"), Some("uno"));
    Ok(())
}

#[test]
fn test_load_with_set_adopts_loaded_priority() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let base = temp_dir.path().join("base");
    let extra = temp_dir.path().join("extra");
    std::fs::write(&base, "Host a\n    User one\nHost b\n    User two\n")?;
    std::fs::write(&extra, "Host x\n    User x\nHost y\n    User y\nHost a\n    User uno\n")?;

    let mut config = Config::new();
    config.load(&base, false)?;
    config.load(&extra, false)?;
    assert_eq!(config.get(Some("a")).unwrap().priority(), 3);
    Ok(())
}

#[test]
fn test_open_gives_earlier_sources_precedence() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let user = temp_dir.path().join("config");
    let system = temp_dir.path().join("ssh_config");
    std::fs::write(&user, "Host *\n    User alice\n")?;
    std::fs::write(&system, "SendEnv LANG\nHost *\n    User root\n    ForwardAgent no\n")?;

    let config = Config::open(vec![Source::from(&user), Source::from(&system)])?;
    assert_eq!(config.get_option(Some("*"), "User"), Some("alice"));
    assert_eq!(config.get_option(Some("*"), "ForwardAgent"), Some("no"));
    assert_eq!(config.get_option(None, "SendEnv"), Some("LANG"));
    Ok(())
}

#[test]
fn test_load_from_stream() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = std::io::Cursor::new("Host s\n    Port 1\n");
    let mut config = Config::new();
    config.load(Source::Reader(&mut input), false)?;
    assert!(config.contains(Some("s")));

    let mut out = Vec::new();
    config.save(Destination::Writer(&mut out))?;
    assert_eq!(String::from_utf8(out)?, "Host s\n    Port 1");
    Ok(())
}

#[tokio::test]
async fn test_async_save_and_load() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("nested").join("dir").join("config");

    let config: Config = "User root\nHost foo\n    Port 22\n".parse()?;
    config.save_to_file(&path).await?;

    let loaded = Config::load_from_file(&path).await?;
    assert_eq!(loaded, config);
    Ok(())
}

#[tokio::test]
async fn test_async_load_missing_file_fails() {
    let temp_dir = tempdir().unwrap();
    let result = Config::load_from_file(temp_dir.path().join("missing")).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to read SSH config file"));
}
