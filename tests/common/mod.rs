#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn write<P: AsRef<Path>>(path: P, content: &str) {
    let path = path.as_ref();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small template root with both template sets and the common templates.
pub fn fixture_templates() -> TempDir {
    let root = TempDir::new().unwrap();
    let p = root.path();

    write(
        p.join("common/package.json.j2"),
        "{\"name\": \"{{ applicationName }}\", \"template\": \"{{ templateName }}\"}\n",
    );
    write(p.join("common/README.md.j2"), "# {{ applicationName }}\n\nRun `{{ cmd }} dev`.\n");
    write(p.join("common/index.html.j2"), "<title>{{ applicationName }}</title>\n");

    for (dir, entry) in [("javascript", "src/main.js"), ("typescript", "src/main.ts")] {
        write(
            p.join(dir).join("package.json"),
            r#"{"name": "template", "dependencies": {"vue": "^3.2.45"}, "devDependencies": {"vite": "^4.0.0"}}"#,
        );
        write(p.join(dir).join(entry), "console.log('hello')\n");
        write(p.join(dir).join(".gitignore.sample"), "node_modules\ndist\n");
        write(p.join(dir).join("README.md"), "template readme\n");
        write(p.join(dir).join("index.html"), "template index\n");
        write(p.join(dir).join("yarn.lock"), "lock\n");
        write(p.join(dir).join("node_modules/vue/index.js"), "module.exports = {}\n");
    }
    write(p.join("typescript/tsconfig.json"), "{}\n");

    root
}
