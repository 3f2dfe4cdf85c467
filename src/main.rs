//! rnaseq-prep: prepare bulk RNA-seq workflow configs and read file names

use anyhow::Result;

fn main() -> Result<()> {
    rnaseq_prep::cli::run()
}
