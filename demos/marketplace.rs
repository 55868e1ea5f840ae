//! End-to-end walkthrough over a scratch database: seed the demo network,
//! then run one transaction of each kind and print what changed.

use kennel_exchange::{fixtures, service::ExchangeService};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let db = sled::open("kennel-demo")?;

    if !db.is_empty() {
        db.clear()?;
    }

    let service = ExchangeService::new(Arc::new(db));
    fixtures::seed(service.registry())?;

    // BH_1 buys Cooper from BH_2; DISC_1 applies to this pair.
    let record = service.buy_dog("BH_1", "BH_2", "D_3", Some("DISC_1"))?;
    println!("purchase applied: {:#?}", record.kind);
    println!("buyer after: {:#?}", service.registry().house("BH_1")?);
    println!("seller after: {:#?}", service.registry().house("BH_2")?);
    println!("dog after: {:#?}", service.registry().dog("D_3")?);

    // Paid mating between Hacky (male, BH_1) and Bella (female, BH_4).
    // BH_4 pays the fee even though its balance cannot cover it.
    let record = service.request_mating("D_10", "D_5", true, None)?;
    println!("mating applied: {:#?}", record.kind);
    println!("paying owner after: {:#?}", service.registry().house("BH_4")?);

    // Unconditional owner swap.
    let record = service.swap_owners("D_1", "D_6")?;
    println!("swap applied: {:#?}", record.kind);

    // Put Dzeki (now owned by BH_3) on the market.
    let record = service.set_for_sale("D_1", true)?;
    println!("flag update applied: {:#?}", record.kind);

    println!("history: {} transactions", service.registry().history()?.len());

    Ok(())
}
