//! Generates yaml CRD resources from rust code.
//! Writes one `<plural>.<group>.yaml` file per resource into the directory named by `CRDS_DIR`,
//! or prints a multi-document stream to stdout when `CRDS_DIR` is unset.
use std::{fs::File, io::Write, path};

#[allow(clippy::unwrap_used)]
fn main() {
    let crds = rook_crd::all_crds();

    let Some(dir) = std::env::var_os("CRDS_DIR") else {
        for crd in &crds {
            println!("---\n{}", serde_yaml::to_string(crd).unwrap());
        }
        return;
    };

    for crd in &crds {
        let schema = serde_yaml::to_string(crd).unwrap();
        let name = crd.metadata.name.clone().unwrap();
        let crd_path = path::Path::new(&dir).join(format!("{name}.yaml"));
        let mut file = File::create(crd_path).unwrap();
        file.write_all(schema.as_bytes()).unwrap();
    }
}
