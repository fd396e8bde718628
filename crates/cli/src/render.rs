use ferrous_sim_application::use_cases::CacheEntryView;
use ferrous_sim_domain::{AuthServerRecord, CompletedQuery, ResolverStats, StepStatus};
use std::io::{self, Write};

fn status_marker(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Success => "[ok]",
        StepStatus::Error => "[x]",
        StepStatus::Warning => "[!]",
        StepStatus::Info => "[i]",
    }
}

pub fn completed_query(out: &mut impl Write, query: &CompletedQuery) -> io::Result<()> {
    writeln!(
        out,
        "Resolution path for {} ({})",
        query.query.domain, query.query.record_type
    )?;

    for (index, step) in query.steps.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<5} {:<21} {:<16} {:>3}ms  {}",
            index + 1,
            status_marker(step.status),
            step.kind.label(),
            step.result,
            step.time_ms,
            step.description
        )?;
    }

    writeln!(out, "  Total resolution time: {}ms", query.total_time_ms)
}

pub fn stats(out: &mut impl Write, stats: &ResolverStats) -> io::Result<()> {
    writeln!(
        out,
        "Total queries: {}  Cache hits: {}  Cache misses: {}  Hit rate: {:.1}%  Avg time: {:.1}ms",
        stats.total_queries,
        stats.hits,
        stats.misses,
        stats.hit_rate(),
        stats.avg_time_ms
    )
}

pub fn cache(out: &mut impl Write, entries: &[CacheEntryView]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "Cache is empty");
    }

    for view in entries {
        writeln!(
            out,
            "  {:<30} {:<6} {:<40} TTL {:>5}s{}",
            view.entry.domain,
            view.entry.record_type,
            view.entry.ip,
            view.remaining_ttl_secs,
            if view.fresh { "" } else { " (expired)" }
        )?;
    }
    Ok(())
}

pub fn servers(out: &mut impl Write, records: &[AuthServerRecord]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No authoritative servers configured");
    }

    for record in records {
        writeln!(
            out,
            "  {:<30} {:<6} {}",
            record.domain, record.record_type, record.ip
        )?;
    }
    Ok(())
}

pub fn history(out: &mut impl Write, queries: &[CompletedQuery]) -> io::Result<()> {
    if queries.is_empty() {
        return writeln!(out, "No queries yet");
    }

    for query in queries {
        let marker = if query.is_resolved() {
            "resolved"
        } else if query.is_failed() {
            "failed"
        } else {
            "pending"
        };
        writeln!(
            out,
            "  {:<8} {:<30} {:<6} {:>3}ms  {}",
            marker,
            query.query.domain,
            query.query.record_type,
            query.total_time_ms,
            query.answer().unwrap_or("-")
        )?;
    }
    Ok(())
}
