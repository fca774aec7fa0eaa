use crate::entity::{Entity, EntityKind, MarkupLanguage};
use crate::markup::{MarkupError, apply_template};
use crate::units::UnitIndex;
use std::collections::BTreeMap;

// offset -> length -> entities, both key levels ascending; entities sharing
// an exact (offset, length) keep their input order.
type EntityGroups<'a> = BTreeMap<usize, BTreeMap<usize, Vec<&'a Entity>>>;

/// Renders `text` with its entities applied as `language` markup.
///
/// Entities are grouped by start offset and rendered innermost-first within
/// a group, so spans sharing a start nest by ascending length. Text not
/// covered by any entity passes through untouched. The only failure is an
/// entity kind the target language has no template for.
pub fn render(
    text: &str,
    entities: &[Entity],
    language: MarkupLanguage,
) -> Result<String, MarkupError> {
    let index = UnitIndex::new(text);
    let mut groups = EntityGroups::new();
    for entity in entities {
        groups
            .entry(entity.offset)
            .or_default()
            .entry(entity.length)
            .or_default()
            .push(entity);
    }

    let mut out = String::new();
    let mut cursor = 0;
    for (&offset, group) in &groups {
        if offset > cursor {
            out.push_str(index.slice(cursor as isize, Some((offset - cursor) as isize)));
        }
        // The longest span starting here decides how far the group reaches.
        let reach = group.keys().next_back().copied().unwrap_or(0);
        let local = index.slice(offset as isize, Some(reach as isize));
        out.push_str(&render_group(local, group, language)?);
        cursor = offset + reach;
    }
    out.push_str(index.slice(cursor as isize, None));
    Ok(out)
}

// Renders one start-offset group over its local text. Walking lengths in
// ascending order and wrapping the whole accumulator each time puts every
// shorter span inside the longer spans that follow it.
fn render_group(
    local: &str,
    group: &BTreeMap<usize, Vec<&Entity>>,
    language: MarkupLanguage,
) -> Result<String, MarkupError> {
    let index = UnitIndex::new(local);
    let mut acc = String::new();
    let mut start = 0;
    for (&length, entities) in group {
        acc.push_str(index.slice(start as isize, Some((length - start) as isize)));
        for entity in entities {
            acc = wrap(language, &entity.kind, acc)?;
        }
        start = length;
    }
    Ok(acc)
}

// Applies one entity's template around the accumulated text, with the
// argument order each kind wants: links and mentions lead with the target
// in the HTML family and trail with it in the Markdown family, `pre`
// appends its language tag, everything else takes the text alone.
fn wrap(language: MarkupLanguage, kind: &EntityKind, text: String) -> Result<String, MarkupError> {
    let template = match kind.template_kind() {
        Some(template) => template,
        None => {
            return Err(MarkupError::UnsupportedMarkup {
                language,
                kind: kind.name(),
            });
        }
    };
    match kind {
        EntityKind::TextLink { url } => {
            let args: [&str; 2] = match language {
                MarkupLanguage::Html => [url, &text],
                MarkupLanguage::Markdown => [&text, url],
            };
            apply_template(language, template, &args)
        }
        EntityKind::TextMention { user_id } => {
            let id = user_id.to_string();
            let args: [&str; 2] = match language {
                MarkupLanguage::Html => [&id, &text],
                MarkupLanguage::Markdown => [&text, &id],
            };
            apply_template(language, template, &args)
        }
        EntityKind::Pre { language: tag } => {
            apply_template(language, template, &[&text, tag.as_deref().unwrap_or("")])
        }
        _ => apply_template(language, template, &[&text]),
    }
}
