use anyhow::Result;

use libinit::OperationMode;

pub async fn run_modes() -> Result<()> {
    println!("Operation modes:");
    for mode in OperationMode::ALL {
        println!("   {}", mode);
    }
    Ok(())
}
