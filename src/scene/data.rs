// data.rs - Generated by content2scene. Do not edit.
//
// Sources: content/journal.md, content/collage.txt, content/site.txt

use super::{CollageItem, JournalEntry};

/// Ambient track streamed by the audio toggle
pub const TRACK_URL: &str = "https://cdn.pixabay.com/download/audio/2022/03/15/audio_a2cfa9d4a9.mp3?filename=lofi-study-112191.mp3";

/// Hosted 3D scene embedded behind the hero copy
pub const SCENE_URL: &str = "https://prod.spline.design/qMOKV671Z1CM9yS7/scene.splinecode";

pub static JOURNAL: [JournalEntry; 3] = [
    JournalEntry {
        title: "On the calm between two rainfalls",
        lines: &[
            "The world holds its breath.",
            "Windows remember the last touch of water.",
            "I walk slower, so my thoughts can catch up.",
        ],
    },
    JournalEntry {
        title: "Heartbeats at the gym",
        lines: &[
            "Iron, breath, focus.",
            "The noise fades until there is only rhythm.",
            "I leave lighter than I arrived.",
        ],
    },
    JournalEntry {
        title: "A page in the dark",
        lines: &[
            "Sometimes I write to see my own face in the mirror of words.",
            "Sometimes I close the book and let the silence speak.",
        ],
    },
];

pub static COLLAGE: [CollageItem; 7] = [
    CollageItem { src: "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1600&auto=format&fit=crop", caption: "This was the day I learned silence is powerful." },
    CollageItem { src: "https://images.unsplash.com/photo-1679072765523-2ec3657a9185?ixid=M3w3OTkxMTl8MHwxfHNlYXJjaHwxfHxUaGlzJTIwd2FzJTIwdGhlJTIwZGF5fGVufDB8MHx8fDE3NjI4NjQ5NzF8MA&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80", caption: "Headphones on. The world softens." },
    CollageItem { src: "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1600&auto=format&fit=crop", caption: "Rain writes its own poetry." },
    CollageItem { src: "https://images.unsplash.com/photo-1679072765523-2ec3657a9185?ixid=M3w3OTkxMTl8MHwxfHNlYXJjaHwxfHxUaGlzJTIwd2FzJTIwdGhlJTIwZGF5fGVufDB8MHx8fDE3NjI4NjQ5NzF8MA&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80", caption: "Code windows, inner windows." },
    CollageItem { src: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?q=80&w=1600&auto=format&fit=crop", caption: "The gym — where my mind stops talking." },
    CollageItem { src: "https://images.unsplash.com/photo-1501594907352-04cda38ebc29?q=80&w=1600&auto=format&fit=crop", caption: "City lights, soft focus feelings." },
    CollageItem { src: "https://images.unsplash.com/photo-1500534314209-a25ddb2bd429?q=80&w=1600&auto=format&fit=crop", caption: "Sunsets that teach gentle endings." },
];
