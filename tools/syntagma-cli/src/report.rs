use serde::Serialize;
use syntagma_doc::{Chunk, Sentence};
use syntagma_protocol::{ChunkRole, SentenceId, TokenId};

/// `[Il /SUJ, mange /VRB, une pomme /OBJ]`
pub fn chunk_line(sentence: &Sentence) -> String {
    let chunks: Vec<String> = sentence
        .chunks()
        .iter()
        .map(|chunk| chunk.display(sentence).to_string())
        .collect();
    format!("[{}]", chunks.join(", "))
}

#[derive(Serialize)]
pub struct ChunkReport<'a> {
    pub role: ChunkRole,
    pub tokens: &'a [TokenId],
    pub words: Vec<&'a str>,
}

impl<'a> ChunkReport<'a> {
    fn new(chunk: &'a Chunk, sentence: &'a Sentence) -> Self {
        Self {
            role: chunk.role(),
            tokens: chunk.tokens(),
            words: chunk.words(sentence).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct SentenceReport<'a> {
    pub id: SentenceId,
    pub text: String,
    pub chunks: Vec<ChunkReport<'a>>,
}

impl<'a> SentenceReport<'a> {
    pub fn new(sentence: &'a Sentence) -> Self {
        Self {
            id: sentence.id(),
            text: sentence.text(),
            chunks: sentence
                .chunks()
                .iter()
                .map(|chunk| ChunkReport::new(chunk, sentence))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntagma_chunker::ChunkSentence;

    const IL_MANGE: &str = "1\tIl\til\tCL\t_\t_\t2\tsuj\n\
                            2\tmange\tmanger\tV\t_\t_\t0\troot\n\
                            3\tune\tun\tDET\t_\t_\t4\tdet\n\
                            4\tpomme\tpomme\tNC\t_\t_\t2\tobj\n";

    #[test]
    fn text_line() {
        let mut doc = syntagma_parser::parse_str(IL_MANGE).unwrap();
        let sentence = &mut doc.sentences_mut()[0];
        sentence.chunk().unwrap();
        assert_eq!(chunk_line(sentence), "[Il /SUJ, mange /VRB, une pomme /OBJ]");
    }

    #[test]
    fn json_report() {
        let mut doc = syntagma_parser::parse_str(IL_MANGE).unwrap();
        let sentence = &mut doc.sentences_mut()[0];
        sentence.chunk().unwrap();

        let value = serde_json::to_value(SentenceReport::new(sentence)).unwrap();
        assert_eq!(value["text"], "Il mange une pomme");
        assert_eq!(value["chunks"][2]["role"], "Object");
        assert_eq!(value["chunks"][2]["tokens"], serde_json::json!([3, 4]));
        assert_eq!(value["chunks"][2]["words"], serde_json::json!(["une", "pomme"]));
    }
}
