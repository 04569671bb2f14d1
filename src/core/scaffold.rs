// Scaffold handlers for the supported commands. Each handler is a pure
// function from validated options (plus, for additive commands, the incoming
// universe) to the universe returned on the wire.
use crate::core::error::{Error, ErrorKind};
use crate::core::options::{CreateApiOptions, InitOptions, LICENSE_APACHE2};
use crate::core::universe::Universe;

pub const LICENSE_PATH: &str = "LICENSE";
pub const MAIN_PATH: &str = "main";

const APACHE2_NOTICE: &str = r#"Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"#;

/// Bootstraps a project universe. The host's accumulated universe does not
/// survive init; the command defines the project from a clean slate.
pub fn init(options: &InitOptions) -> Universe {
    let mut universe = Universe::new();
    if options.license == LICENSE_APACHE2 {
        universe.insert(LICENSE_PATH, APACHE2_NOTICE);
    }
    universe.insert(MAIN_PATH, render_main(&options.domain));
    universe
}

/// Adds one GVK type definition to the incoming universe. Existence is a
/// universe-key lookup; the plugin never consults real storage.
pub fn create_api(options: &CreateApiOptions, mut universe: Universe) -> Result<Universe, Error> {
    let path = types_path(options);
    if universe.contains(&path) {
        return Err(Error::new(ErrorKind::Conflict)
            .with_message("gvk definition must not exist")
            .with_command("create api")
            .with_hint(format!(
                "The universe already holds `{path}`. Pick a different --kind or --version."
            )));
    }
    universe.insert(path, render_types(options));
    Ok(universe)
}

pub fn types_path(options: &CreateApiOptions) -> String {
    format!(
        "api/{}/{}_types.py",
        options.version,
        options.kind.to_lowercase()
    )
}

fn render_main(domain: &str) -> String {
    format!(
        r#"#!/usr/bin/env python3


def main():
    print("Hello, {domain}!")


if __name__ == "__main__":
    main()
"#
    )
}

fn render_types(options: &CreateApiOptions) -> String {
    format!(
        r#"class {kind}:
    group = "{group}"
    version = "{version}"
    kind = "{kind}"

    def __init__(self, name, namespace):
        self.name = name
        self.namespace = namespace
"#,
        kind = options.kind,
        group = options.group,
        version = options.version,
    )
}
