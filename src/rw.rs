/*!
Saving and recalling tables of named complex values.

A table file is TOML with a single `[values]` table; every entry is a
two-element `[real, imaginary]` array:

```toml
[values]
i = [0.0, 1.0]
w = [1.5, -2.0]
```

Values read back in go through `Cx::new()`, so they get rounded just like
values built in code.
*/

use std::collections::BTreeMap;
use std::fs::{File, read_to_string};
use std::io::Write;
use std::path::Path;

use ::serde_derive::{Deserialize, Serialize};
use ::tracing::{debug, info};

use crate::cx::Cx;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Table {
    #[serde(default)]
    pub values: BTreeMap<String, Cx>,
}

impl Table {
    pub fn new() -> Table { Table::default() }

    pub fn insert<S: Into<String>>(&mut self, name: S, z: Cx) -> Option<Cx> {
        self.values.insert(name.into(), z)
    }

    pub fn get(&self, name: &str) -> Option<Cx> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /** Iterate over entries in name order. */
    pub fn iter(&self) -> impl Iterator<Item = (&str, Cx)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io { path: path.to_path_buf(), source }
}

pub fn save<P: AsRef<Path>>(table: &Table, fname: P) -> Result<()> {
    let fname = fname.as_ref();
    let toml_string = toml::to_string(table)?;

    let mut f = File::create(fname).map_err(|e| io_error(fname, e))?;
    f.write_all(toml_string.as_bytes()).map_err(|e| io_error(fname, e))?;
    f.flush().map_err(|e| io_error(fname, e))?;

    info!(path = %fname.display(), n_values = table.len(), "saved value table");
    Ok(())
}

pub fn load<P: AsRef<Path>>(fname: P) -> Result<Table> {
    let fname = fname.as_ref();
    let toml_string = read_to_string(fname).map_err(|e| io_error(fname, e))?;
    debug!(path = %fname.display(), bytes = toml_string.len(), "read table file");

    let table: Table = toml::from_str(&toml_string).map_err(|source| {
        Error::Deserialize { path: fname.to_path_buf(), source }
    })?;

    info!(path = %fname.display(), n_values = table.len(), "loaded value table");
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("polar_cx_{}_{}.toml", name, std::process::id()));
        p
    }

    #[test]
    fn save_and_load() {
        let mut t = Table::new();
        t.insert("i", Cx::I);
        t.insert("w", Cx::new(1.5, -2.0));
        t.insert("third", Cx::new(1.0 / 3.0, 0.0));

        let path = scratch_file("save_and_load");
        save(&t, &path).unwrap();
        let u = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(u.len(), 3);
        assert_eq!(u.get("i"), Some(Cx::I));
        assert_eq!(u.get("w"), Some(Cx::new(1.5, -2.0)));
        assert_eq!(u.get("third").unwrap().re(), t.get("third").unwrap().re());
        let names: Vec<&str> = u.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["i", "third", "w"]);
    }

    #[test]
    fn loaded_values_are_rounded() {
        let path = scratch_file("rounded");
        std::fs::write(&path, "[values]\nz = [0.12345678901234, -1e-12]\n").unwrap();
        let t = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let z = t.get("z").unwrap();
        assert_eq!(z.re(), 0.123_456_789_0);
        assert_eq!(z.im(), 0.0);
    }

    #[test]
    fn empty_file_is_empty_table() {
        let path = scratch_file("empty");
        std::fs::write(&path, "").unwrap();
        let t = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(t.is_empty());
    }

    #[test]
    fn missing_file() {
        let path = scratch_file("does_not_exist");
        match load(&path) {
            Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
            x => panic!("expected an I/O error, got {:?}", &x),
        }
    }

    #[test]
    fn malformed_file() {
        let path = scratch_file("malformed");
        std::fs::write(&path, "[values]\nz = \"1 + 2i\"\n").unwrap();
        let res = load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(res, Err(Error::Deserialize { .. })));
    }
}
