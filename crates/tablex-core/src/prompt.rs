//! Prompt Assembler
//!
//! Embeds the serialized triples into the fixed instruction template sent to
//! the text-generation backend.

/// Task instruction for table lexicalization
pub const LEXICALIZATION_INSTRUCTION: &str = "This is a lexicalization task. The goal for this task is to lexicalize the given table. You will be given an annotated table in rdf triples, with annotations from Wikidata. The annotations are between '<' and '>'.";

const PREAMBLE: &str = "Below is an instruction that describes a task, paired with an input that provides further context. Write a response that appropriately completes the request.";

/// Build the instruction/input/response prompt around `input`
pub fn render(instruction: &str, input: &str) -> String {
    format!(
        "{}\n\n### Instruction:\n{}\n\n### Input:\n{}\n\n### Response:\n",
        PREAMBLE, instruction, input
    )
}

/// Build the lexicalization prompt for serialized triple text
pub fn assemble(triples: &str) -> String {
    render(LEXICALIZATION_INSTRUCTION, triples)
}
