use log::info;

use crate::core::cli::LabelArgs;
use crate::core::distribution::FrequencyMap;
use crate::core::labeling;
use crate::types::AppResult;

pub fn execute_label(args: LabelArgs) -> AppResult<()> {
    let freq = FrequencyMap::load(&args.input)?;
    labeling::export(&freq, &args.output, &args.sample_count)?;
    info!(
        "wrote {} significance label(s) to {}",
        freq.len(),
        args.output.display()
    );
    Ok(())
}
