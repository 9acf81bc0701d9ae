//! TF-IDF text vectorizer (word uni- to tri-grams)

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

lazy_static! {
    /// Tokens of two or more word characters
    static ref TOKEN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
    static ref STOP_WORDS: HashSet<&'static str> = ENGLISH_STOP_WORDS.iter().copied().collect();
}

/// Common English function words dropped before n-grams are built
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "be", "became", "because", "become", "becomes", "been", "before",
    "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond", "both",
    "but", "by", "can", "cannot", "could", "did", "do", "does", "done", "down", "due", "during",
    "each", "either", "else", "elsewhere", "enough", "etc", "even", "ever", "every", "everyone",
    "everything", "everywhere", "except", "few", "for", "former", "formerly", "from", "further",
    "had", "has", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "i", "ie", "if",
    "in", "indeed", "into", "is", "it", "its", "itself", "just", "last", "latter", "least",
    "less", "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most",
    "mostly", "much", "must", "my", "myself", "namely", "neither", "never", "nevertheless",
    "next", "no", "nobody", "none", "nor", "not", "nothing", "now", "nowhere", "of", "off",
    "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our",
    "ours", "ourselves", "out", "over", "own", "per", "perhaps", "please", "rather", "re",
    "same", "seem", "seemed", "seeming", "seems", "several", "she", "should", "since", "so",
    "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still",
    "such", "than", "that", "the", "their", "them", "themselves", "then", "thence", "there",
    "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they", "this",
    "those", "though", "through", "throughout", "thru", "thus", "to", "together", "too",
    "toward", "towards", "under", "until", "up", "upon", "us", "very", "via", "was", "we",
    "well", "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter",
    "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Lowercased word n-grams of a document, stop words removed first
pub fn ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|token| !STOP_WORDS.contains(token))
        .collect();

    let mut grams = Vec::new();
    for n in min_n.max(1)..=max_n {
        for window in tokens.windows(n) {
            grams.push(window.join(" "));
        }
    }
    grams
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    pub max_features: usize,
    pub ngram_range: (usize, usize),
    /// Term to column; columns follow the terms' sorted order
    pub vocabulary: BTreeMap<String, usize>,
    pub idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize, ngram_range: (usize, usize)) -> Self {
        Self {
            max_features,
            ngram_range,
            vocabulary: BTreeMap::new(),
            idf: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Learn the vocabulary and smoothed inverse document frequencies.
    ///
    /// Keeps the `max_features` most frequent terms across the corpus, ties
    /// broken alphabetically.
    pub fn fit(&mut self, documents: &[&str]) {
        let (min_n, max_n) = self.ngram_range;
        let mut term_counts: HashMap<String, usize> = HashMap::new();
        let mut document_counts: HashMap<String, usize> = HashMap::new();

        for document in documents {
            let grams = ngrams(document, min_n, max_n);
            let mut seen = HashSet::new();
            for gram in grams {
                *term_counts.entry(gram.clone()).or_insert(0) += 1;
                if seen.insert(gram.clone()) {
                    *document_counts.entry(gram).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(String, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        let kept: BTreeMap<String, usize> = ranked
            .into_iter()
            .map(|(term, _)| (term, 0))
            .collect();
        self.vocabulary = kept
            .into_keys()
            .enumerate()
            .map(|(column, term)| (term, column))
            .collect();

        let n_documents = documents.len() as f64;
        self.idf = vec![0.0; self.vocabulary.len()];
        for (term, column) in &self.vocabulary {
            let df = document_counts.get(term).copied().unwrap_or(0) as f64;
            self.idf[*column] = ((1.0 + n_documents) / (1.0 + df)).ln() + 1.0;
        }
    }

    /// L2-normalized TF-IDF vector of a document
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        let (min_n, max_n) = self.ngram_range;
        for gram in ngrams(text, min_n, max_n) {
            if let Some(column) = self.vocabulary.get(&gram) {
                vector[*column] += 1.0;
            }
        }

        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }
}
