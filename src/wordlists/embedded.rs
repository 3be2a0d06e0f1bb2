//! Embedded demo word list and frequency sample
//!
//! A compact list of common five-letter words so the CLI and tests run
//! without external files. Real deployments load their own dictionary and
//! frequency files through the loader.

/// Demo dictionary of common five-letter words
pub const WORDS: &[&str] = &[
    "about", "above", "abuse", "actor", "acute", "adult", "after", "again",
    "agent", "agree", "ahead", "alarm", "album", "alert", "alike", "alive",
    "allow", "alone", "along", "alter", "among", "anger", "angle", "ankle",
    "apart", "apple", "apply", "arena", "argue", "arise", "armor", "array",
    "aside", "asset", "audio", "audit", "avoid", "awake", "award", "aware",
    "badge", "basic", "basin", "beach", "beard", "beast", "began", "begin",
    "being", "belly", "below", "bench", "berry", "birth", "black", "blade",
    "blame", "blank", "blast", "blaze", "blend", "bless", "blind", "block",
    "blood", "bloom", "board", "boast", "bonus", "boost", "booth", "bound",
    "brain", "brake", "brand", "brave", "bread", "break", "brick", "bride",
    "brief", "bring", "broad", "brown", "brush", "build", "bunch", "burst",
    "buyer", "cabin", "cable", "candy", "cargo", "carry", "catch", "cause",
    "chain", "chair", "chalk", "charm", "chart", "chase", "cheap", "check",
    "cheek", "cheer", "chess", "chest", "chief", "child", "chill", "civic",
    "civil", "claim", "class", "clean", "clear", "clerk", "click", "cliff",
    "climb", "clock", "close", "cloth", "cloud", "coach", "coast", "color",
    "coral", "couch", "count", "court", "cover", "crack", "craft", "crane",
    "crash", "crate", "cream", "creek", "crime", "crisp", "cross", "crowd",
    "crown", "crude", "crust", "curve", "cycle", "daily", "dairy", "dance",
    "death", "debut", "decay", "delay", "delta", "dense", "depth", "doubt",
    "dozen", "draft", "drain", "drama", "dream", "dress", "drift", "drink",
    "drive", "eager", "early", "earth", "eerie", "eight", "elbow", "elder",
    "empty", "enemy", "enjoy", "enter", "entry", "equal", "erase", "error",
    "event", "every", "exact", "exist", "extra", "fable", "faint", "fairy",
    "faith", "fancy", "fault", "favor", "feast", "fence", "fever", "fiber",
    "field", "fight", "final", "first", "flame", "flash", "fleet", "flesh",
    "float", "flock", "floor", "flour", "fluid", "focus", "force", "forge",
    "forth", "forum", "found", "frame", "fraud", "fresh", "front", "frost",
    "fruit", "fuzzy", "giant", "given", "glass", "globe", "glory", "glove",
    "grace", "grade", "grain", "grand", "grant", "grape", "grasp", "grass",
    "grate", "great", "green", "greet", "grief", "grill", "gross", "group",
    "grove", "guard", "guess", "guest", "guide", "habit", "happy", "harsh",
    "heart", "heavy", "hedge", "hello", "hence", "horse", "hotel", "house",
    "human", "humor", "hurry", "ideal", "image", "imply", "index", "inner",
    "input", "irate", "issue", "ivory", "jeans", "jelly", "joint", "judge",
    "juice", "kneel", "knife", "knock", "known", "label", "labor", "large",
    "laser", "later", "laugh", "layer", "learn", "lease", "least", "leave",
    "legal", "lemon", "level", "light", "limit", "linen", "liver", "llama",
    "local", "logic", "loose", "lower", "loyal", "lucky", "lunch", "lyric",
    "magic", "major", "maple", "march", "match", "mayor", "medal", "media",
    "mercy", "merge", "merit", "metal", "meter", "might", "minor", "minus",
    "model", "money", "month", "moral", "motor", "mount", "mouse", "mouth",
    "movie", "music", "naive", "nerve", "never", "night", "noble", "noise",
    "north", "novel", "nurse", "occur", "ocean", "offer", "often", "onion",
    "orbit", "order", "organ", "other", "ought", "outer", "owner", "paint",
    "panel", "paper", "party", "patch", "pause", "peace", "pearl", "phase",
    "phone", "photo", "piano", "piece", "pilot", "pitch", "place", "plain",
    "plane", "plant", "plate", "pluck", "point", "pound", "power", "press",
    "price", "pride", "prime", "print", "prize", "proof", "proud", "prove",
    "pulse", "punch", "pupil", "queen", "quick", "quiet", "quite", "quota",
    "radio", "raise", "rally", "ranch", "range", "rapid", "ratio", "reach",
    "react", "ready", "realm", "rebel", "refer", "reign", "relax", "relay",
    "reply", "rider", "ridge", "rifle", "right", "rigid", "risky", "rival",
    "river", "roast", "robot", "rocky", "rough", "round", "route", "royal",
    "rural", "salad", "sassy", "sauce", "scale", "scene", "scope", "score",
    "scout", "sense", "serve", "seven", "shade", "shaft", "shake", "shame",
    "shape", "share", "sharp", "sheep", "sheet", "shelf", "shell", "shift",
    "shine", "shirt", "shock", "shore", "short", "shout", "sight", "since",
    "skill", "skirt", "slate", "sleep", "slice", "slide", "slope", "small",
    "smart", "smile", "smoke", "snake", "solid", "solve", "sorry", "sound",
    "south", "space", "spare", "spark", "speak", "speed", "spend", "spice",
    "spike", "spine", "split", "sport", "staff", "stage", "stair", "stake",
    "stand", "stare", "start", "state", "steam", "steel", "steep", "steer",
    "stick", "still", "stock", "stone", "store", "storm", "story", "strip",
    "study", "stuff", "style", "sugar", "suite", "sunny", "super", "sweet",
    "table", "taste", "teach", "thank", "theme", "there", "thick", "thing",
    "think", "third", "those", "three", "throw", "tiger", "tight", "title",
    "toast", "today", "token", "total", "touch", "tower", "trace", "track",
    "trade", "trail", "train", "treat", "trend", "trial", "tribe", "trick",
    "troop", "truck", "truly", "trunk", "trust", "truth", "twist", "uncle",
    "under", "union", "unite", "unity", "upper", "upset", "urban", "usage",
    "usual", "valid", "value", "vapor", "video", "vital", "vivid", "vocal",
    "voice", "wagon", "waste", "watch", "water", "wheat", "wheel", "where",
    "which", "while", "white", "whole", "woman", "world", "worry", "worth",
    "would", "wound", "write", "wrong", "yield", "young", "youth",
];

/// Frequency sample for the demo dictionary
///
/// Weights follow the shape of corpus occurrence counts: everyday words in
/// the hundreds, ordinary vocabulary in the tens, rare words in single
/// digits. Words missing here weigh zero.
pub const FREQUENCIES: &[(&str, f64)] = &[
    ("about", 920.0),
    ("there", 880.0),
    ("which", 860.0),
    ("would", 840.0),
    ("other", 790.0),
    ("after", 740.0),
    ("first", 700.0),
    ("where", 650.0),
    ("those", 600.0),
    ("think", 580.0),
    ("world", 560.0),
    ("every", 530.0),
    ("never", 510.0),
    ("while", 490.0),
    ("might", 470.0),
    ("again", 450.0),
    ("under", 430.0),
    ("house", 410.0),
    ("still", 400.0),
    ("young", 370.0),
    ("great", 360.0),
    ("water", 350.0),
    ("thing", 330.0),
    ("right", 320.0),
    ("place", 300.0),
    ("point", 280.0),
    ("three", 270.0),
    ("found", 250.0),
    ("today", 230.0),
    ("group", 210.0),
    ("light", 200.0),
    ("earth", 180.0),
    ("night", 170.0),
    ("money", 160.0),
    ("sound", 150.0),
    ("power", 140.0),
    ("story", 130.0),
    ("human", 120.0),
    ("music", 110.0),
    ("happy", 100.0),
    ("heart", 95.0),
    ("party", 90.0),
    ("table", 85.0),
    ("early", 80.0),
    ("paper", 75.0),
    ("learn", 70.0),
    ("watch", 65.0),
    ("space", 60.0),
    ("black", 58.0),
    ("white", 55.0),
    ("green", 52.0),
    ("field", 48.0),
    ("horse", 45.0),
    ("plant", 42.0),
    ("mouth", 40.0),
    ("ocean", 35.0),
    ("river", 32.0),
    ("smile", 30.0),
    ("dream", 28.0),
    ("dance", 25.0),
    ("bread", 22.0),
    ("glass", 20.0),
    ("stone", 18.0),
    ("cloud", 15.0),
    ("tiger", 12.0),
    ("piano", 10.0),
    ("grape", 8.0),
    ("slate", 5.0),
    ("crate", 4.5),
    ("crane", 3.2),
    ("maple", 2.8),
    ("llama", 1.5),
    ("grate", 1.2),
    ("irate", 0.9),
    ("eerie", 0.7),
    ("sassy", 0.5),
];
