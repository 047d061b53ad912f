use std::env;
use std::error::Error;
use std::path::Path;

use social_graph::{datagen, load_dataset};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| "network.txt".to_string());
    if !Path::new(&path).exists() {
        println!("{path} not found, generating a sample dataset");
        datagen::generate_dataset(40, 120, &path)?;
    }

    let graph = load_dataset(&path)?;
    println!(
        "loaded {}: {} users, {} friendships",
        path,
        graph.user_count(),
        graph.friendship_count()
    );

    let communities = graph.find_communities();
    println!("{} communities:", communities.len());
    for (id, members) in communities.iter().enumerate() {
        println!("  community {} ({} members)", id, members.len());
    }

    let mut users = graph.users();
    if let Some(user) = users.next() {
        println!(
            "friends of {} at distance 2: {:?}",
            user,
            graph.friends_at_distance_k(user, 2)
        );
        println!("influence domain of {}: {}", user, graph.influence_domain(user));
        if let Some(other) = users.next() {
            println!(
                "common friends of {} and {}: {:?}",
                user,
                other,
                graph.common_friends(user, other)
            );
        }
    }

    graph.save_dot("graph.dot")?;
    println!("wrote graph.dot");

    Ok(())
}
