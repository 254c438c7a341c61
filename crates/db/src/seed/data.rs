//! Built-in datasets for [`super::run`].

use crate::models::artist::CreateArtist;
use crate::models::genre::CreateGenre;
use crate::models::playlist::CreatePlaylist;
use crate::models::song::CreateSong;

use super::SeedData;

fn genre(label: &str, description: &str) -> CreateGenre {
    CreateGenre {
        genre: label.to_string(),
        description: description.to_string(),
    }
}

fn artist(name: &str, rating: i32) -> CreateArtist {
    CreateArtist {
        artist_name: name.to_string(),
        rating,
    }
}

fn song(title: &str, release_year: i32, artist_id: i64, genre: &str) -> CreateSong {
    CreateSong {
        song_title: title.to_string(),
        release_year,
        artist_id,
        genre: genre.to_string(),
    }
}

fn playlist(name: &str, owner: &str, song_ids: &[i64]) -> CreatePlaylist {
    CreatePlaylist {
        playlist_name: name.to_string(),
        owner: owner.to_string(),
        song_ids: song_ids.to_vec(),
    }
}

/// Fixed dataset used by the test suites: 4 genres, 4 artists, 8 songs and
/// 2 playlists.
pub fn test_data() -> SeedData {
    SeedData {
        genres: vec![
            genre("pop", "Catchy, chart-oriented songs"),
            genre("rock", "Guitar-driven bands"),
            genre("jazz", "Improvised and swing"),
            genre("electronic", "Synthesizers and drum machines"),
        ],
        artists: vec![
            artist("Aurora Vale", 8),
            artist("The Night Owls", 6),
            artist("Miles Crane", 9),
            artist("Pixel Harbor", 5),
        ],
        songs: vec![
            song("Neon Skyline", 2019, 1, "pop"),
            song("Broken Compass", 2004, 2, "rock"),
            song("Quiet Hours", 1961, 3, "jazz"),
            song("Harbor Lights", 2015, 4, "electronic"),
            song("Golden Static", 2021, 1, "pop"),
            song("Iron Ferris Wheel", 1998, 2, "rock"),
            song("Velvet Tempo", 1959, 3, "jazz"),
            song("Dial Tone Dreams", 2012, 4, "electronic"),
        ],
        playlists: vec![
            playlist("Late Night", "sam", &[3, 7, 2]),
            playlist("Road Trip", "alex", &[1, 6, 4, 5]),
        ],
    }
}

/// Dataset loaded by the `setlist-seed` binary for local development.
pub fn development_data() -> SeedData {
    let mut data = test_data();

    data.genres.push(genre("folk", "Acoustic storytelling"));
    data.genres.push(genre("hip-hop", "Beats and rhymes"));

    data.artists.push(artist("Juniper Road", 7));
    data.artists.push(artist("MC Lantern", 8));

    data.songs.extend([
        song("Woodsmoke", 2010, 5, "folk"),
        song("River Ballad", 2016, 5, "folk"),
        song("Lantern Light", 2018, 6, "hip-hop"),
        song("Concrete Garden", 2022, 6, "hip-hop"),
    ]);

    data.playlists
        .push(playlist("Sunday Morning", "sam", &[9, 10, 3]));

    data
}
