//! Assembled prompt value object

use super::placeholder::PlaceholderContext;
use super::request::GenerationRequest;
use super::templates::PromptSection;

/// Instruction pinning the Bible translation used for quotations
const TRANSLATION_INSTRUCTION: &str = "Gunakan Alkitab terjemahan dari LAI (Lembaga Alkitab Indonesia)";

/// Value object holding the final prompt text sent to the generator.
/// Built from a base block followed by the selected catalog sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    content: String,
    sections: Vec<PromptSection>,
}

impl AssembledPrompt {
    /// Build the prompt for a validated request.
    ///
    /// Sections are evaluated in a fixed order, each gated by its option
    /// flag. The output depends on nothing but the request.
    pub fn build(request: &GenerationRequest) -> Self {
        let options = request.options();
        let context = PlaceholderContext {
            topic: request.topic().as_str(),
            bible_verse: request.bible_verse(),
            structure: request.structure(),
            audience: request.audience(),
            custom_instructions: options.custom_instructions(),
        };

        let plan = [
            (options.include_purpose(), PromptSection::Purpose),
            (options.include_bible_research(), PromptSection::BibleResearch),
            (true, PromptSection::Structure),
            (options.include_applications(), PromptSection::Application),
            (options.include_call_to_action(), PromptSection::CallToAction),
            (
                options.custom_instructions().is_some(),
                PromptSection::CustomInstructions,
            ),
            (true, PromptSection::Format),
        ];

        let sections: Vec<PromptSection> = plan
            .into_iter()
            .filter_map(|(enabled, section)| enabled.then_some(section))
            .collect();

        let mut blocks = Vec::with_capacity(sections.len() + 1);
        blocks.push(base_block(request));
        blocks.extend(sections.iter().map(|s| context.substitute(s.template())));

        Self {
            content: blocks.concat(),
            sections,
        }
    }

    /// Get the prompt text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the prompt text
    pub fn into_content(self) -> String {
        self.content
    }

    /// Catalog sections included after the base block, in emission order
    pub fn sections(&self) -> &[PromptSection] {
        &self.sections
    }

    pub fn contains_section(&self, section: PromptSection) -> bool {
        self.sections.contains(&section)
    }
}

fn base_block(request: &GenerationRequest) -> String {
    let verse_line = request
        .bible_verse()
        .map(|v| format!("Based on the Bible verse: {}", v))
        .unwrap_or_default();

    format!(
        "\nGenerate a sermon outline on the topic: \"{}\"\n{}\nSermon structure: {} ({})\nTarget audience: {} ({})\n{}\n",
        request.topic(),
        verse_line,
        request.structure(),
        request.structure().description(),
        request.audience(),
        request.audience().description(),
        TRANSLATION_INSTRUCTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sermon::placeholder::{has_unresolved, BIBLE_VERSE_FALLBACK};
    use crate::domain::sermon::request::{PromptOptions, Topic};
    use crate::domain::sermon::structure::ALL_STRUCTURES;
    use crate::domain::sermon::templates::ALL_SECTIONS;
    use crate::domain::sermon::{Audience, SermonStructure, ALL_AUDIENCES};

    fn kasih() -> GenerationRequest {
        GenerationRequest::new(
            Topic::parse("Kasih").unwrap(),
            SermonStructure::Topical,
            Audience::General,
        )
    }

    fn position(prompt: &AssembledPrompt, section: PromptSection) -> usize {
        prompt
            .content()
            .find(section.heading())
            .unwrap_or_else(|| panic!("{} block missing", section.name()))
    }

    #[test]
    fn absent_options_include_every_optional_block_in_order() {
        let prompt = AssembledPrompt::build(&kasih());

        assert_eq!(
            prompt.sections(),
            &[
                PromptSection::Purpose,
                PromptSection::BibleResearch,
                PromptSection::Structure,
                PromptSection::Application,
                PromptSection::CallToAction,
                PromptSection::Format,
            ]
        );

        let base = prompt.content().find("Generate a sermon outline").unwrap();
        let mut last = base;
        for section in prompt.sections() {
            let at = position(&prompt, *section);
            assert!(at > last, "{} out of order", section.name());
            last = at;
        }
    }

    #[test]
    fn base_block_describes_request() {
        let prompt = AssembledPrompt::build(&kasih());
        let content = prompt.content();
        assert!(content.starts_with("\nGenerate a sermon outline on the topic: \"Kasih\"\n"));
        assert!(content.contains(&format!(
            "Sermon structure: topical ({})",
            SermonStructure::Topical.description()
        )));
        assert!(content.contains(&format!(
            "Target audience: general ({})",
            Audience::General.description()
        )));
        assert!(content.contains(TRANSLATION_INSTRUCTION));
        assert!(!content.contains("Based on the Bible verse"));
    }

    #[test]
    fn disabling_call_to_action_leaves_other_blocks() {
        let request = kasih().with_options(PromptOptions {
            include_call_to_action: Some(false),
            ..Default::default()
        });
        let prompt = AssembledPrompt::build(&request);

        assert!(!prompt.contains_section(PromptSection::CallToAction));
        assert!(!prompt.content().contains(PromptSection::CallToAction.heading()));
        for section in [
            PromptSection::Purpose,
            PromptSection::BibleResearch,
            PromptSection::Structure,
            PromptSection::Application,
            PromptSection::Format,
        ] {
            assert!(prompt.contains_section(section));
            assert!(prompt.content().contains(section.heading()));
        }
    }

    #[test]
    fn each_flag_removes_only_its_block() {
        let cases = [
            (
                PromptOptions {
                    include_purpose: Some(false),
                    ..Default::default()
                },
                PromptSection::Purpose,
            ),
            (
                PromptOptions {
                    include_bible_research: Some(false),
                    ..Default::default()
                },
                PromptSection::BibleResearch,
            ),
            (
                PromptOptions {
                    include_applications: Some(false),
                    ..Default::default()
                },
                PromptSection::Application,
            ),
            (
                PromptOptions {
                    include_call_to_action: Some(false),
                    ..Default::default()
                },
                PromptSection::CallToAction,
            ),
        ];

        let full = AssembledPrompt::build(&kasih());
        for (options, removed) in cases {
            let prompt = AssembledPrompt::build(&kasih().with_options(options));
            let expected: Vec<_> = full
                .sections()
                .iter()
                .copied()
                .filter(|s| *s != removed)
                .collect();
            assert_eq!(prompt.sections(), expected.as_slice());
        }
    }

    #[test]
    fn explicit_true_matches_absent() {
        let explicit = kasih().with_options(PromptOptions {
            include_purpose: Some(true),
            include_bible_research: Some(true),
            include_applications: Some(true),
            include_call_to_action: Some(true),
            custom_instructions: None,
        });
        assert_eq!(
            AssembledPrompt::build(&explicit).content(),
            AssembledPrompt::build(&kasih()).content()
        );
    }

    #[test]
    fn structure_block_is_always_present_exactly_once() {
        let request = kasih().with_options(PromptOptions {
            include_purpose: Some(false),
            include_bible_research: Some(false),
            include_applications: Some(false),
            include_call_to_action: Some(false),
            custom_instructions: None,
        });
        let prompt = AssembledPrompt::build(&request);
        assert_eq!(
            prompt.sections(),
            &[PromptSection::Structure, PromptSection::Format]
        );
        assert_eq!(
            prompt
                .content()
                .matches(PromptSection::Structure.heading())
                .count(),
            1
        );
    }

    #[test]
    fn custom_instructions_sit_between_call_to_action_and_format() {
        let request = kasih().with_options(PromptOptions {
            custom_instructions: Some("Gunakan ilustrasi kontemporer".to_string()),
            ..Default::default()
        });
        let prompt = AssembledPrompt::build(&request);

        let custom = position(&prompt, PromptSection::CustomInstructions);
        let text = prompt.content().find("Gunakan ilustrasi kontemporer").unwrap();
        assert!(position(&prompt, PromptSection::CallToAction) < custom);
        assert!(custom < text);
        assert!(text < position(&prompt, PromptSection::Format));
    }

    #[test]
    fn empty_custom_instructions_add_no_block() {
        let request = kasih().with_options(PromptOptions {
            custom_instructions: Some(String::new()),
            ..Default::default()
        });
        let prompt = AssembledPrompt::build(&request);
        assert!(!prompt.contains_section(PromptSection::CustomInstructions));
    }

    #[test]
    fn missing_verse_renders_fallback_phrase() {
        let prompt = AssembledPrompt::build(&kasih());
        assert!(prompt.content().contains(BIBLE_VERSE_FALLBACK));
    }

    #[test]
    fn verse_is_rendered_literally() {
        let prompt = AssembledPrompt::build(&kasih().with_bible_verse("Yohanes 3:16"));
        assert!(prompt
            .content()
            .contains("Based on the Bible verse: Yohanes 3:16"));
        assert!(prompt
            .content()
            .contains("Jadikan Yohanes 3:16 sebagai teks acuan utama"));
        assert!(!prompt.content().contains(BIBLE_VERSE_FALLBACK));
    }

    #[test]
    fn no_unresolved_tokens_for_any_combination() {
        for structure in ALL_STRUCTURES {
            for audience in ALL_AUDIENCES {
                for mask in 0u8..16 {
                    let request = GenerationRequest::new(
                        Topic::parse("Pengharapan").unwrap(),
                        *structure,
                        *audience,
                    )
                    .with_options(PromptOptions {
                        include_purpose: Some(mask & 1 == 0),
                        include_bible_research: Some(mask & 2 == 0),
                        include_applications: Some(mask & 4 == 0),
                        include_call_to_action: Some(mask & 8 == 0),
                        custom_instructions: Some("Fokus pada {topic}".to_string()),
                    });
                    let prompt = AssembledPrompt::build(&request);
                    assert!(
                        !has_unresolved(prompt.content()),
                        "unresolved token for {} / {} / {}",
                        structure,
                        audience,
                        mask
                    );
                }
            }
        }
    }

    #[test]
    fn build_is_deterministic() {
        let request = kasih()
            .with_bible_verse("1 Korintus 13:4-7")
            .with_options(PromptOptions {
                include_bible_research: Some(false),
                custom_instructions: Some("Singkat saja".to_string()),
                ..Default::default()
            });
        let first = AssembledPrompt::build(&request);
        let second = AssembledPrompt::build(&request);
        assert_eq!(first, second);
    }

    #[test]
    fn structure_and_audience_tags_flow_into_templates() {
        let request = GenerationRequest::new(
            Topic::parse("Yusuf dan saudaranya").unwrap(),
            SermonStructure::Narrative,
            Audience::Youth,
        );
        let prompt = AssembledPrompt::build(&request);
        assert!(prompt.content().contains("Ikuti struktur narrative"));
        assert!(prompt
            .content()
            .contains("disesuaikan untuk audiens youth"));
    }

    #[test]
    fn every_catalog_section_is_reachable() {
        let request = kasih().with_options(PromptOptions {
            custom_instructions: Some("x".to_string()),
            ..Default::default()
        });
        assert_eq!(AssembledPrompt::build(&request).sections(), ALL_SECTIONS);
    }
}
