#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Scratch build directory with stand-in `ninja` and `nm` scripts.
///
/// The fake ninja prints `<build_dir>/<target>.cmds`; the fake nm prints
/// `<file>.nm` for the file it is asked to list.
pub struct FakeBuildDir {
    pub temp: tempfile::TempDir,
    pub build_dir: PathBuf,
    pub nm: PathBuf,
    pub ninja: PathBuf,
}

impl FakeBuildDir {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let build_dir = temp.path().join("build");
        fs::create_dir_all(&build_dir).expect("create build dir");
        let tools = temp.path().join("tools");
        fs::create_dir_all(&tools).expect("create tools dir");
        let nm = write_script(&tools, "nm", "#!/bin/sh\nexec cat \"$2.nm\"\n");
        let ninja = write_script(&tools, "ninja", "#!/bin/sh\nexec cat \"$2/$5.cmds\"\n");
        Self { temp, build_dir, nm, ninja }
    }

    /// Register the command dump the fake ninja returns for `target`.
    pub fn link(&self, target: &str, commands: &str) -> &Self {
        fs::write(self.build_dir.join(format!("{target}.cmds")), commands).expect("write cmds");
        self
    }

    /// Create `rel` under the build dir and give it a symbol listing.
    pub fn file(&self, rel: &str, listing: &str) -> &Self {
        self.file_bytes(rel, listing.as_bytes())
    }

    /// Like [`FakeBuildDir::file`] but with a raw byte listing.
    pub fn file_bytes(&self, rel: &str, listing: &[u8]) -> &Self {
        let path = self.build_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, b"").expect("write file");
        fs::write(format!("{}.nm", path.display()), listing).expect("write listing");
        self
    }
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write script");
    let mut perms = fs::metadata(&path).expect("script metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod script");
    path
}

/// Two objects sharing a weak inline function, one SIMD namespace, and some
/// code the objects do not account for.
pub fn sample_project() -> FakeBuildDir {
    let fake = FakeBuildDir::new();
    fake.link("app", "cc -c a.c -o obj/a.o\ncc -c b.c -o obj/b.o\nc++ obj/a.o obj/b.o gone.o -o app\n")
        .file("obj/a.o", "obj/a.o:\ninline_fn W 0 10\nhelper t 10 8\ncounter B 0 4\n")
        .file("obj/b.o", "inline_fn W 0 10\n_ZN3jxl6N_SSE44FillEv T 0 20\nunused T 20 100\n")
        .file(
            "app",
            "inline_fn W 1000 10\nhelper t 1010 8\n_ZN3jxl6N_SSE44FillEv T 1020 20\n\
             _start T 1040 30\ncounter B 2000 4\nprintf U\n",
        );
    fake
}
