use anyhow::Result;

use libinit::Banner;

pub async fn run_banner(go_package: Option<String>) -> Result<()> {
    Banner::for_crate(go_package).print();
    Ok(())
}
