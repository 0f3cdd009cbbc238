//! `$GENERATE` range expansion: `range[/step] lhs [ttl] [class] type rhs`,
//! with `$`/`$$`/`${offset,width,base}` substitution in `lhs` and `rhs`.

use zone_par::{GenerateSpec, GeneratedRecord};

use crate::codec::StandardCodec;
use crate::rdata::RData;

pub fn expand(codec: &StandardCodec, spec: &GenerateSpec, origin: &str) -> Result<Vec<GeneratedRecord<RData>>, String> {
    use zone_par::RDataDecoder;

    let (start, stop, step) = parse_range(&spec.range)?;
    if step == 0 {
        return Err(format!("$GENERATE step must be nonzero: \"{}\"", spec.range));
    }

    let mut out = Vec::new();
    let mut n = start;
    loop {
        let reached_end = if step > 0 { n > stop } else { n < stop };
        if reached_end {
            break;
        }

        let owner = substitute(&spec.lhs, n)?;
        let fqdn = codec.fqdn(&owner, origin)?;
        let rhs = substitute(&spec.rhs, n)?;
        let fields: Vec<String> = rhs.split_whitespace().map(str::to_string).collect();
        let rdata = codec.decode(spec.rrtype, spec.class, origin, &fields)?;
        out.push(GeneratedRecord { name: fqdn, rdata });

        n = n.wrapping_add(step);
    }
    Ok(out)
}

/// Parses `"start-stop"` or `"start-stop/step"`. `step` defaults to 1.
fn parse_range(range: &str) -> Result<(i64, i64, i64), String> {
    let (bounds, step) = match range.split_once('/') {
        Some((bounds, step)) => (bounds, step.parse::<i64>().map_err(|_| format!("bad $GENERATE step: \"{step}\""))?),
        None => (range, 1),
    };
    let (start, stop) = bounds
        .split_once('-')
        .ok_or_else(|| format!("bad $GENERATE range: \"{range}\""))?;
    let start: i64 = start.parse().map_err(|_| format!("bad $GENERATE range start: \"{start}\""))?;
    let stop: i64 = stop.parse().map_err(|_| format!("bad $GENERATE range stop: \"{stop}\""))?;
    Ok((start, stop, step))
}

/// Expands `$`/`$$`/`${offset[,width[,base]]}` in `template` against `n`.
fn substitute(template: &str, n: i64) -> Result<String, String> {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'$' {
            out.push(bytes[i] as char);
            i += 1;
            continue;
        }
        if bytes.get(i + 1) == Some(&b'$') {
            out.push('$');
            i += 2;
            continue;
        }
        if bytes.get(i + 1) == Some(&b'{') {
            let end = template[i..]
                .find('}')
                .map(|p| i + p)
                .ok_or_else(|| format!("unterminated \"${{\" in \"{template}\""))?;
            let spec = &template[i + 2..end];
            out.push_str(&format_dollar_brace(spec, n)?);
            i = end + 1;
            continue;
        }
        out.push_str(&n.to_string());
        i += 1;
    }
    Ok(out)
}

/// Formats `${offset[,width[,base]]}` as `(n + offset)` in `base`
/// (`d`/`o`/`x`/`X`), zero-padded to `width`.
fn format_dollar_brace(spec: &str, n: i64) -> Result<String, String> {
    let mut parts = spec.split(',');
    let offset: i64 = parts
        .next()
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(|_| format!("bad \\${{}} offset: \"{s}\"")))
        .transpose()?
        .unwrap_or(0);
    let width: usize = parts
        .next()
        .map(|s| s.parse().map_err(|_| format!("bad \\${{}} width: \"{s}\"")))
        .transpose()?
        .unwrap_or(0);
    let base = parts.next().unwrap_or("d");

    let value = n.wrapping_add(offset);
    let rendered = match base {
        "d" => format!("{value}"),
        "o" => format!("{value:o}"),
        "x" => format!("{value:x}"),
        "X" => format!("{value:X}"),
        other => return Err(format!("unsupported \\${{}} base: \"{other}\"")),
    };
    let sign = if rendered.starts_with('-') { "-" } else { "" };
    let digits = rendered.trim_start_matches('-');
    Ok(format!("{sign}{digits:0>width$}"))
}
