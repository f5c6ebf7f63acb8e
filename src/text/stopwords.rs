// English stopword table

use once_cell::sync::Lazy;
use std::collections::HashSet;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // articles, conjunctions, prepositions
        "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "if", "then", "else",
        "than", "because", "as", "until", "while", "of", "at", "by", "for", "with",
        "about", "against", "between", "into", "through", "during", "before", "after",
        "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "once", "upon", "onto", "within", "without",
        "among", "across", "along", "around", "behind", "beside", "besides", "toward",
        "towards", "via", "per",
        // pronouns and determiners
        "i", "me", "my", "myself", "we", "us", "our", "ours", "ourselves", "you",
        "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
        "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
        "their", "theirs", "themselves", "what", "which", "who", "whom", "whose",
        "this", "that", "these", "those", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "no", "not", "only", "own", "same", "too",
        "very", "every", "everyone", "everything", "someone", "something", "anyone",
        "anything", "nothing", "none", "nobody", "one", "another", "either", "neither",
        "several", "many", "much", "less", "least", "whatever", "whoever",
        // auxiliaries and common verbs
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "having", "do", "does", "did", "doing", "done", "will", "would", "shall",
        "should", "can", "could", "may", "might", "must", "ought", "get", "got",
        "make", "made", "go", "say", "see", "take", "put", "give", "call", "show",
        // adverbs and discourse markers
        "here", "there", "when", "where", "why", "how", "just", "now", "also", "still",
        "even", "ever", "never", "always", "often", "really", "quite", "rather",
        "already", "almost", "however", "therefore", "thus", "though", "although",
        "whether", "well", "perhaps", "otherwise", "indeed", "anyway", "somehow",
        "sometimes", "somewhere", "everywhere", "anywhere", "nowhere", "meanwhile",
        "moreover", "hence", "whereas", "whenever", "wherever", "together", "back",
        "enough", "else", "yes", "ok", "okay", "please",
        // contraction fragments left after splitting on apostrophes
        "s", "t", "m", "d", "ll", "re", "ve", "n", "don", "didn", "doesn", "isn", "aren",
        "wasn", "weren", "won", "wouldn", "couldn", "shouldn", "hasn", "haven", "hadn",
        "mustn", "needn", "ain", "ca",
    ]
    .into_iter()
    .collect()
});

/// Check whether a lowercase token is an English stopword
pub(crate) fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
