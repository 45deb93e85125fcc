//! Open a file with the platform's default application.

use std::path::Path;
use std::process::Command;

use crate::spec::{EnumOsFamily, OpenFileError, SpecOpenCommand};

/// Derive the platform open command for an absolute path.
///
/// Windows goes through the `cmd` shell (`start` is a builtin); Linux and
/// macOS execute their openers directly. Unrecognized platforms are an
/// explicit error.
pub fn derive_open_command(
    os_family: EnumOsFamily,
    path_abs: &Path,
) -> Result<SpecOpenCommand, OpenFileError> {
    let path_text = path_abs.to_string_lossy().to_string();
    match os_family {
        EnumOsFamily::Windows => Ok(SpecOpenCommand {
            program: "cmd".to_string(),
            // `start` treats its first quoted argument as a window title.
            args: vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                path_text,
            ],
        }),
        EnumOsFamily::Linux => Ok(SpecOpenCommand {
            program: "xdg-open".to_string(),
            args: vec![path_text],
        }),
        EnumOsFamily::MacOs => Ok(SpecOpenCommand {
            program: "open".to_string(),
            args: vec![path_text],
        }),
        EnumOsFamily::Other => Err(OpenFileError::UnsupportedPlatform(os_family)),
    }
}

/// Resolve `path_file` relative to the current working directory and open it
/// with the platform's default application.
///
/// The opener process is spawned detached; its exit status is not awaited.
pub fn open_with_default_app(path_file: &Path) -> Result<(), OpenFileError> {
    let path_abs = path_file
        .canonicalize()
        .map_err(|_| OpenFileError::PathNotFound(path_file.to_path_buf()))?;

    let command = derive_open_command(EnumOsFamily::detect(), &path_abs)?;
    Command::new(&command.program)
        .args(&command.args)
        .spawn()
        .map(|_| ())
        .map_err(|err| OpenFileError::SpawnFailed {
            path: path_abs,
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_windows_command_goes_through_cmd_start() {
        let command =
            derive_open_command(EnumOsFamily::Windows, Path::new("C:\\out\\report.xlsx")).unwrap();
        assert_eq!(command.program, "cmd");
        assert_eq!(
            command.args,
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                "C:\\out\\report.xlsx".to_string()
            ]
        );
    }

    #[test]
    fn test_linux_and_macos_execute_openers_directly() {
        let command =
            derive_open_command(EnumOsFamily::Linux, Path::new("/out/report.xlsx")).unwrap();
        assert_eq!(command.program, "xdg-open");
        assert_eq!(command.args, vec!["/out/report.xlsx".to_string()]);

        let command =
            derive_open_command(EnumOsFamily::MacOs, Path::new("/out/report.xlsx")).unwrap();
        assert_eq!(command.program, "open");
        assert_eq!(command.args, vec!["/out/report.xlsx".to_string()]);
    }

    #[test]
    fn test_unrecognized_platform_is_an_explicit_error() {
        let result = derive_open_command(EnumOsFamily::Other, Path::new("/out/report.xlsx"));
        assert!(matches!(
            result,
            Err(OpenFileError::UnsupportedPlatform(EnumOsFamily::Other))
        ));
    }

    #[test]
    fn test_missing_path_is_reported_before_spawning() {
        let path_missing = PathBuf::from("definitely-missing-sheetkit-file.xlsx");
        let result = open_with_default_app(&path_missing);
        assert!(matches!(result, Err(OpenFileError::PathNotFound(_))));
    }
}
