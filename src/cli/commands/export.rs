use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::resolve_range;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        input,
        file,
        range,
        slots,
        force,
    } = cmd
    {
        let bounds = resolve_range(range)?;
        let entries = ctx.load_entries(input)?;
        let buckets = ctx.engine.bucket_by_day(&entries);
        ExportLogic::export(&buckets, *format, file, bounds, *slots, *force)?;
    }
    Ok(())
}
